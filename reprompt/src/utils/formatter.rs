use crate::utils::sanitize::FilterErrorNot;

/// Something that happened while a reader was looking for a valid value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "event", rename_all = "snake_case")
)]
pub enum Event {
    /// A token was not a valid value of the expected type.
    TypeRejected { token: String, expected: String },
    /// A typed value fell outside `[low, high]`.
    RangeRejected {
        value: String,
        low: String,
        high: String,
    },
    /// A value passed every check and was returned.
    Accepted { value: String },
}

/// Trait for rendering reader events.
///
/// A `MessageFormatter` decides what, if anything, a [`Terminal`] writes to its
/// output sink for each [`Event`]. Returning `None` keeps the event silent.
///
/// [`Terminal`]: crate::utils::Terminal
pub trait MessageFormatter {
    fn format(&self, event: &Event) -> Option<String>;
}

impl<F: MessageFormatter + ?Sized> MessageFormatter for Box<F> {
    fn format(&self, event: &Event) -> Option<String> {
        (**self).format(event)
    }
}

/// Formats rejections as human-readable retry prompts; acceptance is silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

/// Formats every event as one JSON object per line.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl MessageFormatter for RawFormatter {
    fn format(&self, event: &Event) -> Option<String> {
        match event {
            Event::TypeRejected { expected, .. } => {
                Some(FilterErrorNot::Type(expected.clone()).to_string())
            }
            Event::RangeRejected { low, high, .. } => {
                Some(FilterErrorNot::Between(low.clone(), high.clone()).to_string())
            }
            Event::Accepted { .. } => None,
        }
    }
}

#[cfg(feature = "json")]
impl MessageFormatter for JsonFormatter {
    fn format(&self, event: &Event) -> Option<String> {
        serde_json::to_string(event).ok().map(|mut line| {
            line.push('\n');
            line
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_raw_rejections() {
        let type_rejected = Event::TypeRejected {
            token: "pizza".to_string(),
            expected: "a whole number".to_string(),
        };
        assert_eq!(
            RawFormatter.format(&type_rejected).as_deref(),
            Some("Invalid data type, should be a whole number, try again: ")
        );

        let range_rejected = Event::RangeRejected {
            value: "42.81".to_string(),
            low: "5.5".to_string(),
            high: "42.8".to_string(),
        };
        assert_eq!(
            RawFormatter.format(&range_rejected).as_deref(),
            Some("Invalid range, should be between 5.5 and 42.8, try again: ")
        );
    }

    #[test]
    fn test_formatter_raw_accepted_is_silent() {
        let accepted = Event::Accepted {
            value: "7".to_string(),
        };
        assert_eq!(RawFormatter.format(&accepted), None);
    }

    #[test]
    fn test_formatter_boxed() {
        let formatter: Box<dyn MessageFormatter> = Box::new(RawFormatter);
        let event = Event::RangeRejected {
            value: "3".to_string(),
            low: "6".to_string(),
            high: "37".to_string(),
        };
        assert_eq!(formatter.format(&event), RawFormatter.format(&event));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_formatter_json_lines() {
        let event = Event::TypeRejected {
            token: "maybe".to_string(),
            expected: "a boolean".to_string(),
        };
        assert_eq!(
            JsonFormatter.format(&event).as_deref(),
            Some("{\"event\":\"type_rejected\",\"token\":\"maybe\",\"expected\":\"a boolean\"}\n")
        );

        let accepted = Event::Accepted {
            value: "true".to_string(),
        };
        assert_eq!(
            JsonFormatter.format(&accepted).as_deref(),
            Some("{\"event\":\"accepted\",\"value\":\"true\"}\n")
        );
    }
}
