use std::fmt;
use std::sync::Arc;

pub const DEFAULT_SEPARATOR: &str = " ";

type Producer = Arc<dyn Fn() -> String + Send + Sync>;

/// Anything that can become the content of a webhook message.
#[derive(Clone)]
pub enum MessageInput {
    Text(String),
    /// Evaluated every time the message is formatted.
    Lazy(Producer),
    List(Vec<MessageInput>),
}

impl MessageInput {
    pub fn lazy<F, D>(f: F) -> Self
    where
        F: Fn() -> D + Send + Sync + 'static,
        D: fmt::Display,
    {
        Self::Lazy(Arc::new(move || f().to_string()))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Lazy(_) => false,
            Self::List(items) => items.is_empty(),
        }
    }
}

/// Flattens `input` into a single string.
///
/// List elements are each followed by `separator`, the last one included.
pub fn format(input: &MessageInput, separator: &str) -> String {
    match input {
        MessageInput::Text(text) => text.clone(),
        MessageInput::Lazy(produce) => produce(),
        MessageInput::List(items) => {
            let mut message = String::new();
            for item in items {
                message.push_str(&format(item, separator));
                message.push_str(separator);
            }
            message
        }
    }
}

impl fmt::Display for MessageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(self, DEFAULT_SEPARATOR))
    }
}

impl fmt::Debug for MessageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl From<&str> for MessageInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for MessageInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

macro_rules! display_into_text {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessageInput {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

display_into_text!(bool, char, i32, i64, u32, u64, usize, f32, f64);

impl<T: Into<MessageInput>> From<Vec<T>> for MessageInput {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MessageInput>, const N: usize> From<[T; N]> for MessageInput {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
