//! SIGN_MODE_LEGACY_AMINO_JSON sign-doc construction.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cosm_primitives::ec::{PublicKey, Signature};

use super::json::sorted_json;
use super::types::{AminoMsg, AminoPubKey, StdFee, StdSignDoc, StdSignature, StdTx, PUBKEY_SECP256K1_TYPE};
use crate::TxError;

/// Assemble an amino `StdSignDoc`.
///
/// Account number and sequence are stringified; messages and fee coins keep
/// the caller's order.
///
/// # Returns
/// The sign doc, or `TxError::Validation` if the chain id is empty.
pub fn make_sign_doc(
    msgs: Vec<AminoMsg>,
    fee: StdFee,
    chain_id: &str,
    memo: &str,
    account_number: u64,
    sequence: u64,
) -> Result<StdSignDoc, TxError> {
    if chain_id.is_empty() {
        return Err(TxError::Validation("chain id must not be empty".to_string()));
    }
    Ok(StdSignDoc {
        account_number: account_number.to_string(),
        chain_id: chain_id.to_string(),
        fee,
        memo: memo.to_string(),
        msgs,
        sequence: sequence.to_string(),
    })
}

/// The exact bytes that get signed: canonical sorted-key JSON of `sign_doc`.
pub fn serialize_sign_doc(sign_doc: &StdSignDoc) -> Result<Vec<u8>, TxError> {
    let value = serde_json::to_value(sign_doc)?;
    Ok(sorted_json(&value)?.into_bytes())
}

/// Combine a signed doc and its signature into a broadcastable `StdTx`.
pub fn make_std_tx(signed: StdSignDoc, signature: StdSignature) -> StdTx {
    StdTx {
        msg: signed.msgs,
        fee: signed.fee,
        signatures: vec![signature],
        memo: signed.memo,
    }
}

/// Amino JSON form of a secp256k1 public key.
pub fn encode_secp256k1_pubkey(pubkey: &PublicKey) -> AminoPubKey {
    AminoPubKey {
        key_type: PUBKEY_SECP256K1_TYPE.to_string(),
        value: BASE64.encode(pubkey.to_compressed()),
    }
}

/// Amino JSON form of a signature and the key that made it.
pub fn encode_secp256k1_signature(pubkey: &PublicKey, signature: &Signature) -> StdSignature {
    StdSignature {
        pub_key: encode_secp256k1_pubkey(pubkey),
        signature: BASE64.encode(signature.to_fixed()),
    }
}

/// Recover the public key and fixed signature from a `StdSignature`.
///
/// # Returns
/// The decoded pair, or an error if the key type is not secp256k1 or either
/// value is malformed.
pub fn decode_signature(signature: &StdSignature) -> Result<(PublicKey, Signature), TxError> {
    if signature.pub_key.key_type != PUBKEY_SECP256K1_TYPE {
        return Err(TxError::Validation(format!(
            "unsupported public key type {}",
            signature.pub_key.key_type
        )));
    }
    let key_bytes = BASE64
        .decode(&signature.pub_key.value)
        .map_err(|e| TxError::Validation(format!("invalid base64 public key: {}", e)))?;
    let sig_bytes = BASE64
        .decode(&signature.signature)
        .map_err(|e| TxError::Validation(format!("invalid base64 signature: {}", e)))?;
    let pubkey = PublicKey::from_bytes(&key_bytes)?;
    let sig = Signature::from_fixed(&sig_bytes)?;
    Ok((pubkey, sig))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino::types::Coin;
    use serde_json::json;

    fn fee() -> StdFee {
        StdFee {
            amount: vec![Coin::new("2000", "ucosm")],
            gas: "200000".to_string(),
        }
    }

    #[test]
    fn test_empty_fields_are_explicit() {
        let doc = make_sign_doc(vec![], fee(), "simd-testing", "", 0, 0).unwrap();
        let bytes = serialize_sign_doc(&doc).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"account_number":"0","chain_id":"simd-testing","fee":{"amount":[{"amount":"2000","denom":"ucosm"}],"gas":"200000"},"memo":"","msgs":[],"sequence":"0"}"#
        );
    }

    #[test]
    fn test_large_numbers_stringified() {
        let doc = make_sign_doc(vec![], fee(), "c", "", u64::MAX, 9_007_199_254_740_993).unwrap();
        assert_eq!(doc.account_number, "18446744073709551615");
        assert_eq!(doc.sequence, "9007199254740993");
        assert!(make_sign_doc(vec![], fee(), "", "", 0, 0).is_err());
    }

    #[test]
    fn test_make_std_tx_keeps_order() {
        let msgs = vec![
            AminoMsg { msg_type: "b".to_string(), value: json!({}) },
            AminoMsg { msg_type: "a".to_string(), value: json!({}) },
        ];
        let doc = make_sign_doc(msgs.clone(), fee(), "c", "memo", 1, 2).unwrap();
        let sig = StdSignature {
            pub_key: AminoPubKey {
                key_type: PUBKEY_SECP256K1_TYPE.to_string(),
                value: String::new(),
            },
            signature: String::new(),
        };
        let tx = make_std_tx(doc, sig.clone());
        assert_eq!(tx.msg, msgs);
        assert_eq!(tx.memo, "memo");
        assert_eq!(tx.signatures, vec![sig]);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["signatures"][0]["pub_key"]["type"], "tendermint/PubKeySecp256k1");
        assert_eq!(json["msg"][0]["type"], "b");
    }
}
