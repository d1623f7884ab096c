//! Well-known protobuf types.

pub mod protobuf {
    /// `Any` contains an arbitrary serialized protocol buffer message along
    /// with a URL that describes the type of the serialized message.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Any {
        /// A URL/resource name that uniquely identifies the type of the
        /// serialized protocol buffer message, e.g.
        /// `/cosmos.bank.v1beta1.MsgSend`.
        #[prost(string, tag = "1")]
        pub type_url: ::prost::alloc::string::String,
        /// Must be a valid serialized protocol buffer of the above specified type.
        #[prost(bytes = "vec", tag = "2")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }

    crate::message::typed_message!(Any, "/google.protobuf.Any", [1, 2]);
}
