//! Traits tying protobuf message types to their type URLs.

use std::any::Any as StdAny;
use std::fmt;

use prost::Message;

use crate::google::protobuf::Any;

/// A protobuf message with a stable type URL.
///
/// `FIELD_TAGS` lists every top-level field number the schema declares; any
/// other field found on the wire is treated as unknown and preserved by the
/// registry.
pub trait TypedMessage:
    Message + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    const TYPE_URL: &'static str;
    const FIELD_TAGS: &'static [u32];

    /// Pack this message into an `Any` under its own type URL.
    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }
}

/// Object-safe view of a message, used for dynamic dispatch in the registry.
pub trait ProtoMessage: fmt::Debug + Send + Sync {
    /// Type URL the message type declares for itself.
    fn type_url(&self) -> &'static str;

    /// Rust type name, for error messages.
    fn type_name(&self) -> &'static str;

    /// Canonical protobuf encoding.
    fn encode_proto(&self) -> Vec<u8>;

    fn as_any(&self) -> &dyn StdAny;

    fn clone_boxed(&self) -> Box<dyn ProtoMessage>;

    /// Value equality across the trait object boundary.
    fn eq_dyn(&self, other: &dyn ProtoMessage) -> bool;
}

impl<M: TypedMessage> ProtoMessage for M {
    fn type_url(&self) -> &'static str {
        M::TYPE_URL
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<M>()
    }

    fn encode_proto(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn as_any(&self) -> &dyn StdAny {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ProtoMessage> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn ProtoMessage) -> bool {
        other
            .as_any()
            .downcast_ref::<M>()
            .map_or(false, |o| o == self)
    }
}

impl dyn ProtoMessage + '_ {
    /// Borrow the concrete message, if it is an `M`.
    pub fn downcast_ref<M: TypedMessage>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}

impl Clone for Box<dyn ProtoMessage> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Implement [`TypedMessage`] for a prost message type.
macro_rules! typed_message {
    ($ty:ty, $url:literal, [$($tag:literal),* $(,)?]) => {
        impl $crate::message::TypedMessage for $ty {
            const TYPE_URL: &'static str = $url;
            const FIELD_TAGS: &'static [u32] = &[$($tag),*];
        }
    };
}
pub(crate) use typed_message;
