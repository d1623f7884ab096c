//! Cosmos SDK protobuf message types.
//!
//! Module paths mirror the protobuf packages, so `cosmos.bank.v1beta1.MsgSend`
//! lives at `cosmos::bank::v1beta1::MsgSend`.

pub mod base {
    pub mod v1beta1 {
        /// Coin defines a token with a denomination and an amount.
        ///
        /// The amount is an arbitrary precision integer carried as decimal text.
        #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
        pub struct Coin {
            #[prost(string, tag = "1")]
            pub denom: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub amount: ::prost::alloc::string::String,
        }

        impl Coin {
            pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
                Coin {
                    denom: denom.into(),
                    amount: amount.into(),
                }
            }
        }

        crate::message::typed_message!(Coin, "/cosmos.base.v1beta1.Coin", [1, 2]);
    }
}

pub mod bank {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        /// MsgSend represents a message to send coins from one account to another.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgSend {
            #[prost(string, tag = "1")]
            pub from_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub to_address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "3")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
        }

        /// Input models transaction input.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Input {
            #[prost(string, tag = "1")]
            pub address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub coins: ::prost::alloc::vec::Vec<Coin>,
        }

        /// Output models transaction outputs.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Output {
            #[prost(string, tag = "1")]
            pub address: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub coins: ::prost::alloc::vec::Vec<Coin>,
        }

        /// MsgMultiSend represents an arbitrary multi-in, multi-out send message.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgMultiSend {
            #[prost(message, repeated, tag = "1")]
            pub inputs: ::prost::alloc::vec::Vec<Input>,
            #[prost(message, repeated, tag = "2")]
            pub outputs: ::prost::alloc::vec::Vec<Output>,
        }

        crate::message::typed_message!(MsgSend, "/cosmos.bank.v1beta1.MsgSend", [1, 2, 3]);
        crate::message::typed_message!(MsgMultiSend, "/cosmos.bank.v1beta1.MsgMultiSend", [1, 2]);
    }
}

pub mod staking {
    pub mod v1beta1 {
        use super::super::base::v1beta1::Coin;

        /// MsgDelegate defines a message for performing a delegation of coins
        /// from a delegator to a validator.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgDelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub amount: ::core::option::Option<Coin>,
        }

        /// MsgUndelegate defines a message for performing an undelegation from
        /// a delegate and a validator.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgUndelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "3")]
            pub amount: ::core::option::Option<Coin>,
        }

        /// MsgBeginRedelegate defines a message for performing a redelegation
        /// of coins from a delegator and source validator to a destination
        /// validator.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgBeginRedelegate {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_src_address: ::prost::alloc::string::String,
            #[prost(string, tag = "3")]
            pub validator_dst_address: ::prost::alloc::string::String,
            #[prost(message, optional, tag = "4")]
            pub amount: ::core::option::Option<Coin>,
        }

        crate::message::typed_message!(MsgDelegate, "/cosmos.staking.v1beta1.MsgDelegate", [1, 2, 3]);
        crate::message::typed_message!(MsgUndelegate, "/cosmos.staking.v1beta1.MsgUndelegate", [1, 2, 3]);
        crate::message::typed_message!(
            MsgBeginRedelegate,
            "/cosmos.staking.v1beta1.MsgBeginRedelegate",
            [1, 2, 3, 4]
        );
    }
}

pub mod distribution {
    pub mod v1beta1 {
        /// MsgWithdrawDelegatorReward represents delegation withdrawal to a
        /// delegator from a single validator.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MsgWithdrawDelegatorReward {
            #[prost(string, tag = "1")]
            pub delegator_address: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub validator_address: ::prost::alloc::string::String,
        }

        crate::message::typed_message!(
            MsgWithdrawDelegatorReward,
            "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
            [1, 2]
        );
    }
}

pub mod crypto {
    pub mod secp256k1 {
        /// PubKey defines a secp256k1 public key in 33-byte compressed form.
        #[derive(Clone, PartialEq, Eq, ::prost::Message)]
        pub struct PubKey {
            #[prost(bytes = "vec", tag = "1")]
            pub key: ::prost::alloc::vec::Vec<u8>,
        }

        crate::message::typed_message!(PubKey, "/cosmos.crypto.secp256k1.PubKey", [1]);
    }

    pub mod multisig {
        use crate::google::protobuf::Any;

        /// LegacyAminoPubKey specifies a public key type which nests multiple
        /// public keys and a threshold.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LegacyAminoPubKey {
            #[prost(uint32, tag = "1")]
            pub threshold: u32,
            #[prost(message, repeated, tag = "2")]
            pub public_keys: ::prost::alloc::vec::Vec<Any>,
        }

        crate::message::typed_message!(
            LegacyAminoPubKey,
            "/cosmos.crypto.multisig.LegacyAminoPubKey",
            [1, 2]
        );

        pub mod v1beta1 {
            /// CompactBitArray is an implementation of a space efficient bit
            /// array.
            #[derive(Clone, PartialEq, Eq, ::prost::Message)]
            pub struct CompactBitArray {
                #[prost(uint32, tag = "1")]
                pub extra_bits_stored: u32,
                #[prost(bytes = "vec", tag = "2")]
                pub elems: ::prost::alloc::vec::Vec<u8>,
            }
        }
    }
}

pub mod tx {
    pub mod signing {
        pub mod v1beta1 {
            /// SignMode represents a signing mode with its own security guarantees.
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum SignMode {
                /// Unknown signing mode, rejected by nodes.
                Unspecified = 0,
                /// Signs the protobuf `SignDoc`.
                Direct = 1,
                Textual = 2,
                /// Signs the legacy amino JSON `StdSignDoc`.
                LegacyAminoJson = 127,
            }
        }
    }

    pub mod v1beta1 {
        use crate::cosmos::base::v1beta1::Coin;
        use crate::cosmos::crypto::multisig::v1beta1::CompactBitArray;
        use crate::google::protobuf::Any;

        /// Tx is the standard type used for broadcasting transactions.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Tx {
            #[prost(message, optional, tag = "1")]
            pub body: ::core::option::Option<TxBody>,
            #[prost(message, optional, tag = "2")]
            pub auth_info: ::core::option::Option<AuthInfo>,
            #[prost(bytes = "vec", repeated, tag = "3")]
            pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
        }

        /// TxRaw is a variant of Tx that pins the signer's exact binary
        /// representation of body and auth_info.
        #[derive(Clone, PartialEq, Eq, ::prost::Message)]
        pub struct TxRaw {
            #[prost(bytes = "vec", tag = "1")]
            pub body_bytes: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
            /// One signature per signer info, in the same order.
            #[prost(bytes = "vec", repeated, tag = "3")]
            pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
        }

        /// SignDoc is the type used for generating sign bytes for SIGN_MODE_DIRECT.
        #[derive(Clone, PartialEq, Eq, ::prost::Message)]
        pub struct SignDoc {
            #[prost(bytes = "vec", tag = "1")]
            pub body_bytes: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", tag = "2")]
            pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
            #[prost(string, tag = "3")]
            pub chain_id: ::prost::alloc::string::String,
            #[prost(uint64, tag = "4")]
            pub account_number: u64,
        }

        /// TxBody is the body of a transaction that all signers sign over.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct TxBody {
            #[prost(message, repeated, tag = "1")]
            pub messages: ::prost::alloc::vec::Vec<Any>,
            #[prost(string, tag = "2")]
            pub memo: ::prost::alloc::string::String,
            /// Block height after which this transaction will not be processed.
            #[prost(uint64, tag = "3")]
            pub timeout_height: u64,
            /// Options that are rejected by nodes that do not understand them.
            #[prost(message, repeated, tag = "1023")]
            pub extension_options: ::prost::alloc::vec::Vec<Any>,
            #[prost(message, repeated, tag = "2047")]
            pub non_critical_extension_options: ::prost::alloc::vec::Vec<Any>,
        }

        /// AuthInfo describes the fee and signer modes that are used to sign a
        /// transaction.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct AuthInfo {
            #[prost(message, repeated, tag = "1")]
            pub signer_infos: ::prost::alloc::vec::Vec<SignerInfo>,
            #[prost(message, optional, tag = "2")]
            pub fee: ::core::option::Option<Fee>,
        }

        /// SignerInfo describes the public key and signing mode of a single
        /// top-level signer.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct SignerInfo {
            #[prost(message, optional, tag = "1")]
            pub public_key: ::core::option::Option<Any>,
            #[prost(message, optional, tag = "2")]
            pub mode_info: ::core::option::Option<ModeInfo>,
            #[prost(uint64, tag = "3")]
            pub sequence: u64,
        }

        /// ModeInfo describes the signing mode of a single or nested multisig
        /// signer.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ModeInfo {
            #[prost(oneof = "mode_info::Sum", tags = "1, 2")]
            pub sum: ::core::option::Option<mode_info::Sum>,
        }

        /// Nested message and enum types in `ModeInfo`.
        pub mod mode_info {
            /// Single is the mode info for a single signer.
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Single {
                #[prost(enumeration = "super::super::signing::v1beta1::SignMode", tag = "1")]
                pub mode: i32,
            }

            /// Multi is the mode info for a multisig public key.
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Multi {
                #[prost(message, optional, tag = "1")]
                pub bitarray: ::core::option::Option<super::CompactBitArray>,
                #[prost(message, repeated, tag = "2")]
                pub mode_infos: ::prost::alloc::vec::Vec<super::ModeInfo>,
            }

            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Sum {
                #[prost(message, tag = "1")]
                Single(Single),
                #[prost(message, tag = "2")]
                Multi(Multi),
            }
        }

        impl ModeInfo {
            /// Mode info for a single signer using `mode`.
            pub fn single(mode: super::signing::v1beta1::SignMode) -> Self {
                ModeInfo {
                    sum: Some(mode_info::Sum::Single(mode_info::Single { mode: mode as i32 })),
                }
            }
        }

        /// Fee includes the amount of coins paid in fees and the maximum gas
        /// to be used by the transaction.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Fee {
            #[prost(message, repeated, tag = "1")]
            pub amount: ::prost::alloc::vec::Vec<Coin>,
            #[prost(uint64, tag = "2")]
            pub gas_limit: u64,
            #[prost(string, tag = "3")]
            pub payer: ::prost::alloc::string::String,
            #[prost(string, tag = "4")]
            pub granter: ::prost::alloc::string::String,
        }

        crate::message::typed_message!(Tx, "/cosmos.tx.v1beta1.Tx", [1, 2, 3]);
        crate::message::typed_message!(TxRaw, "/cosmos.tx.v1beta1.TxRaw", [1, 2, 3]);
        crate::message::typed_message!(SignDoc, "/cosmos.tx.v1beta1.SignDoc", [1, 2, 3, 4]);
        crate::message::typed_message!(TxBody, "/cosmos.tx.v1beta1.TxBody", [1, 2, 3, 1023, 2047]);
        crate::message::typed_message!(AuthInfo, "/cosmos.tx.v1beta1.AuthInfo", [1, 2]);
    }
}
