//! Type registry mapping type URLs to message schemas.
//!
//! A `Registry` is populated through `&mut self` during initialization and
//! then shared immutably (typically as `Arc<Registry>`) for encode/decode
//! traffic. There is no global instance; construct one per application
//! context and pass it to whatever needs it.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use prost::Message;
use tracing::{debug, trace};

use crate::codec::UnknownFields;
use crate::cosmos::bank::v1beta1::{MsgMultiSend, MsgSend};
use crate::cosmos::crypto::multisig::LegacyAminoPubKey;
use crate::cosmos::crypto::secp256k1::PubKey;
use crate::cosmos::distribution::v1beta1::MsgWithdrawDelegatorReward;
use crate::cosmos::staking::v1beta1::{MsgBeginRedelegate, MsgDelegate, MsgUndelegate};
use crate::cosmos::tx::v1beta1::{AuthInfo, TxBody, TxRaw};
use crate::error::{DecodeError, ProtoError};
use crate::google::protobuf::Any;
use crate::message::{ProtoMessage, TypedMessage};

// -----------------------------------------------------------------------
// Schemas
// -----------------------------------------------------------------------

/// A codec-capable description of one message type.
pub trait MessageSchema: Send + Sync {
    /// Rust type name of the values this schema handles.
    fn type_name(&self) -> &'static str;

    /// Identity of the Rust type, used to tell identical bindings apart
    /// from conflicting ones.
    fn rust_type(&self) -> TypeId;

    /// Top-level field numbers declared by the schema.
    fn known_tags(&self) -> &'static [u32];

    /// Encode `value`, or return `None` if it is not of this schema's type.
    fn encode(&self, value: &dyn ProtoMessage) -> Option<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn ProtoMessage>, DecodeError>;

    /// The empty value of the type.
    fn default_value(&self) -> Box<dyn ProtoMessage>;
}

/// Schema for a prost message type implementing [`TypedMessage`].
pub struct TypedSchema<M> {
    _marker: PhantomData<fn() -> M>,
}

impl<M> TypedSchema<M> {
    pub fn new() -> Self {
        TypedSchema {
            _marker: PhantomData,
        }
    }
}

impl<M> Default for TypedSchema<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TypedMessage> MessageSchema for TypedSchema<M> {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<M>()
    }

    fn rust_type(&self) -> TypeId {
        TypeId::of::<M>()
    }

    fn known_tags(&self) -> &'static [u32] {
        M::FIELD_TAGS
    }

    fn encode(&self, value: &dyn ProtoMessage) -> Option<Vec<u8>> {
        value.downcast_ref::<M>().map(|m| m.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn ProtoMessage>, DecodeError> {
        let value = M::decode(bytes)?;
        Ok(Box::new(value))
    }

    fn default_value(&self) -> Box<dyn ProtoMessage> {
        Box::new(M::default())
    }
}

// -----------------------------------------------------------------------
// Decoded values
// -----------------------------------------------------------------------

/// Result of decoding an `Any` through the registry.
#[derive(Clone, Debug)]
pub struct DecodedMessage {
    /// The type URL the payload was tagged with.
    pub type_url: String,
    /// The typed value.
    pub value: Box<dyn ProtoMessage>,
    /// Top-level fields the schema does not declare, kept for re-encoding.
    pub unknown_fields: UnknownFields,
}

impl PartialEq for DecodedMessage {
    fn eq(&self, other: &Self) -> bool {
        self.type_url == other.type_url
            && self.value.eq_dyn(other.value.as_ref())
            && self.unknown_fields == other.unknown_fields
    }
}

impl DecodedMessage {
    /// Borrow the value as an `M`, if that is its type.
    pub fn downcast_ref<M: TypedMessage>(&self) -> Option<&M> {
        self.value.downcast_ref::<M>()
    }
}

// -----------------------------------------------------------------------
// Registry
// -----------------------------------------------------------------------

/// Mapping from type URL to message schema.
#[derive(Clone, Default)]
pub struct Registry {
    types: BTreeMap<String, Arc<dyn MessageSchema>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            types: BTreeMap::new(),
        }
    }

    /// Create a registry seeded with the built-in bank, staking,
    /// distribution, crypto and tx types.
    pub fn with_defaults() -> Self {
        let mut registry = Registry::new();
        registry.insert::<MsgSend>();
        registry.insert::<MsgMultiSend>();
        registry.insert::<MsgDelegate>();
        registry.insert::<MsgUndelegate>();
        registry.insert::<MsgBeginRedelegate>();
        registry.insert::<MsgWithdrawDelegatorReward>();
        registry.insert::<PubKey>();
        registry.insert::<LegacyAminoPubKey>();
        registry.insert::<TxBody>();
        registry.insert::<AuthInfo>();
        registry.insert::<TxRaw>();
        registry
    }

    fn insert<M: TypedMessage>(&mut self) {
        self.types
            .insert(M::TYPE_URL.to_string(), Arc::new(TypedSchema::<M>::new()));
    }

    /// Bind `type_url` to `schema`.
    ///
    /// Re-registering the same Rust type under the same URL is a no-op.
    ///
    /// # Arguments
    /// * `type_url` - The identifier, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    /// * `schema` - The codec for values of this type.
    ///
    /// # Returns
    /// `Err(ProtoError::DuplicateType)` if the URL is already bound to a
    /// different type.
    pub fn register<S>(&mut self, type_url: impl Into<String>, schema: S) -> Result<(), ProtoError>
    where
        S: MessageSchema + 'static,
    {
        let type_url = type_url.into();
        if let Some(existing) = self.types.get(&type_url) {
            if existing.rust_type() == schema.rust_type() {
                trace!(type_url = %type_url, "type already registered");
                return Ok(());
            }
            return Err(ProtoError::DuplicateType {
                type_url,
                existing: existing.type_name(),
            });
        }
        debug!(type_url = %type_url, rust_type = schema.type_name(), "registered message type");
        self.types.insert(type_url, Arc::new(schema));
        Ok(())
    }

    /// Register `M` under its own [`TypedMessage::TYPE_URL`].
    pub fn register_type<M: TypedMessage>(&mut self) -> Result<(), ProtoError> {
        self.register(M::TYPE_URL, TypedSchema::<M>::new())
    }

    /// Whether a schema is bound to `type_url`.
    pub fn contains(&self, type_url: &str) -> bool {
        self.types.contains_key(type_url)
    }

    /// All registered type URLs in sorted order.
    pub fn type_urls(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(|k| k.as_str())
    }

    /// The default value of the type bound to `type_url`.
    pub fn default_value(&self, type_url: &str) -> Result<Box<dyn ProtoMessage>, ProtoError> {
        Ok(self.lookup(type_url)?.default_value())
    }

    fn lookup(&self, type_url: &str) -> Result<&Arc<dyn MessageSchema>, ProtoError> {
        self.types
            .get(type_url)
            .ok_or_else(|| ProtoError::UnknownType(type_url.to_string()))
    }

    /// Encode `value` into an `Any` tagged with `type_url`.
    ///
    /// # Returns
    /// `Err(ProtoError::UnknownType)` if nothing is registered under the URL,
    /// `Err(ProtoError::TypeMismatch)` if `value` is not the registered type.
    pub fn encode(&self, type_url: &str, value: &dyn ProtoMessage) -> Result<Any, ProtoError> {
        let schema = self.lookup(type_url)?;
        let bytes = schema.encode(value).ok_or_else(|| ProtoError::TypeMismatch {
            type_url: type_url.to_string(),
            expected: schema.type_name(),
            got: value.type_name(),
        })?;
        Ok(Any {
            type_url: type_url.to_string(),
            value: bytes,
        })
    }

    /// Encode a message under its own type URL, which must be registered.
    pub fn encode_msg<M: TypedMessage>(&self, msg: &M) -> Result<Any, ProtoError> {
        self.encode(M::TYPE_URL, msg)
    }

    /// Decode an `Any` into its registered type.
    ///
    /// Top-level fields the schema does not declare are captured in
    /// [`DecodedMessage::unknown_fields`].
    ///
    /// # Returns
    /// `Err(ProtoError::UnknownType)` for an unregistered URL, or
    /// `Err(ProtoError::Decode)` with the type URL attached for malformed bytes.
    pub fn decode(&self, any: &Any) -> Result<DecodedMessage, ProtoError> {
        let schema = self.lookup(&any.type_url)?;
        let unknown_fields = UnknownFields::capture(&any.value, schema.known_tags())
            .map_err(|e| e.with_type_url(&any.type_url))?;
        let value = schema
            .decode(&any.value)
            .map_err(|e| e.with_type_url(&any.type_url))?;
        if !unknown_fields.is_empty() {
            debug!(
                type_url = %any.type_url,
                tags = ?unknown_fields.tags(),
                "preserving unknown fields"
            );
        }
        Ok(DecodedMessage {
            type_url: any.type_url.clone(),
            value,
            unknown_fields,
        })
    }

    /// Decode an `Any` and return it as the concrete type `M`.
    pub fn decode_as<M: TypedMessage>(&self, any: &Any) -> Result<M, ProtoError> {
        let decoded = self.decode(any)?;
        match decoded.value.downcast_ref::<M>() {
            Some(m) => Ok(m.clone()),
            None => Err(ProtoError::TypeMismatch {
                type_url: any.type_url.clone(),
                expected: std::any::type_name::<M>(),
                got: decoded.value.type_name(),
            }),
        }
    }

    /// Encode a decoded message again, re-emitting preserved unknown fields
    /// after the known ones.
    pub fn reencode(&self, decoded: &DecodedMessage) -> Result<Any, ProtoError> {
        let mut any = self.encode(&decoded.type_url, decoded.value.as_ref())?;
        decoded.unknown_fields.write_to(&mut any.value);
        Ok(any)
    }

    /// Encode a transaction body holding `messages`, each packed under its
    /// own type URL.
    ///
    /// # Returns
    /// The serialized `TxBody`, or the first encoding error.
    pub fn encode_tx_body(
        &self,
        messages: &[&dyn ProtoMessage],
        memo: &str,
    ) -> Result<Vec<u8>, ProtoError> {
        let messages = messages
            .iter()
            .map(|m| self.encode(m.type_url(), *m))
            .collect::<Result<Vec<_>, _>>()?;
        let body = TxBody {
            messages,
            memo: memo.to_string(),
            ..Default::default()
        };
        Ok(body.encode_to_vec())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}
