//! CosmWasm `wasm.v1` messages.
//!
//! Not part of the default registry. Call [`register`] to add them, the same
//! way any chain-specific module extends a registry. Amino converters for
//! these messages live in `cosm_signing::amino::wasm`.

use crate::error::ProtoError;
use crate::registry::Registry;

pub mod wasm {
    pub mod v1 {
        use crate::cosmos::base::v1beta1::Coin;

        /// AccessType permission types.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum AccessType {
            Unspecified = 0,
            Nobody = 1,
            Everybody = 3,
            AnyOfAddresses = 4,
        }

        /// AccessConfig access control type.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct AccessConfig {
            #[prost(enumeration = "AccessType", tag = "1")]
            pub permission: i32,
            #[prost(string, repeated, tag = "3")]
            pub addresses: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }

        /// MsgStoreCode submits Wasm code to the system.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgStoreCode {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            /// Raw or gzip compressed wasm bytecode.
            #[prost(bytes = "vec", tag = "2")]
            pub wasm_byte_code: ::prost::alloc::vec::Vec<u8>,
            #[prost(message, optional, tag = "5")]
            pub instantiate_permission: ::core::option::Option<AccessConfig>,
        }

        /// MsgInstantiateContract creates a new smart contract instance for
        /// the given code id.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgInstantiateContract {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub admin: ::prost::alloc::string::String,
            #[prost(uint64, tag = "3")]
            pub code_id: u64,
            #[prost(string, tag = "4")]
            pub label: ::prost::alloc::string::String,
            /// JSON encoded init message.
            #[prost(bytes = "vec", tag = "5")]
            pub msg: ::prost::alloc::vec::Vec<u8>,
            #[prost(message, repeated, tag = "6")]
            pub funds: ::prost::alloc::vec::Vec<Coin>,
        }

        /// MsgExecuteContract submits the given message data to a smart contract.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgExecuteContract {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub contract: ::prost::alloc::string::String,
            /// JSON encoded execute message.
            #[prost(bytes = "vec", tag = "3")]
            pub msg: ::prost::alloc::vec::Vec<u8>,
            #[prost(message, repeated, tag = "5")]
            pub funds: ::prost::alloc::vec::Vec<Coin>,
        }

        /// MsgMigrateContract runs a code upgrade/ downgrade for a smart contract.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgMigrateContract {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub contract: ::prost::alloc::string::String,
            #[prost(uint64, tag = "3")]
            pub code_id: u64,
            #[prost(bytes = "vec", tag = "4")]
            pub msg: ::prost::alloc::vec::Vec<u8>,
        }

        /// MsgUpdateAdmin sets a new admin for a smart contract.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUpdateAdmin {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub new_admin: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub contract: ::prost::alloc::string::String,
        }

        /// MsgClearAdmin removes any admin stored for a smart contract.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgClearAdmin {
            #[prost(string, tag = "1")]
            pub sender: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub contract: ::prost::alloc::string::String,
        }

        crate::message::typed_message!(MsgStoreCode, "/cosmwasm.wasm.v1.MsgStoreCode", [1, 2, 5]);
        crate::message::typed_message!(
            MsgInstantiateContract,
            "/cosmwasm.wasm.v1.MsgInstantiateContract",
            [1, 2, 3, 4, 5, 6]
        );
        crate::message::typed_message!(
            MsgExecuteContract,
            "/cosmwasm.wasm.v1.MsgExecuteContract",
            [1, 2, 3, 5]
        );
        crate::message::typed_message!(
            MsgMigrateContract,
            "/cosmwasm.wasm.v1.MsgMigrateContract",
            [1, 2, 3, 4]
        );
        crate::message::typed_message!(MsgUpdateAdmin, "/cosmwasm.wasm.v1.MsgUpdateAdmin", [1, 2, 3]);
        crate::message::typed_message!(MsgClearAdmin, "/cosmwasm.wasm.v1.MsgClearAdmin", [1, 3]);
    }
}

/// Register every `cosmwasm.wasm.v1` message type.
pub fn register(registry: &mut Registry) -> Result<(), ProtoError> {
    use wasm::v1::*;

    registry.register_type::<MsgStoreCode>()?;
    registry.register_type::<MsgInstantiateContract>()?;
    registry.register_type::<MsgExecuteContract>()?;
    registry.register_type::<MsgMigrateContract>()?;
    registry.register_type::<MsgUpdateAdmin>()?;
    registry.register_type::<MsgClearAdmin>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::wasm::v1::*;
    use super::*;
    use crate::message::TypedMessage;

    #[test]
    fn test_register_extends_defaults() {
        let mut registry = Registry::with_defaults();
        assert!(!registry.contains(MsgExecuteContract::TYPE_URL));
        register(&mut registry).unwrap();
        assert!(registry.contains(MsgExecuteContract::TYPE_URL));
        // idempotent
        register(&mut registry).unwrap();

        let msg = MsgExecuteContract {
            sender: "wasm1sender".to_string(),
            contract: "wasm1contract".to_string(),
            msg: br#"{"release":{}}"#.to_vec(),
            funds: vec![],
        };
        let any = registry.encode_msg(&msg).unwrap();
        let decoded: MsgExecuteContract = registry.decode_as(&any).unwrap();
        assert_eq!(decoded, msg);
    }
}
