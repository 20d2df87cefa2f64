//! Detached ed25519 signature verification against a base58 wallet address.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, Signature, Verifier, VerifyingKey};

/// Checks that `signature` (base58) was produced over `message` by the
/// private key matching `wallet_address` (base58 ed25519 public key).
///
/// Never fails outward: malformed base58, wrong-length key material, and a
/// signature that simply does not verify all yield `false`.
#[must_use]
pub fn verify_wallet_signature(signature: &str, message: &str, wallet_address: &str) -> bool {
    let Ok(signature_bytes) = bs58::decode(signature).into_vec() else {
        return false;
    };
    let Ok(key_bytes) = bs58::decode(wallet_address).into_vec() else {
        return false;
    };

    let Ok(key_array) = <[u8; PUBLIC_KEY_LENGTH]>::try_from(key_bytes) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&key_array) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&signature_bytes) else {
        return false;
    };

    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::rngs::OsRng;

    fn signed_payload(message: &str) -> (String, String) {
        let signing_key = SigningKey::generate(&mut OsRng);
        let signature = signing_key.sign(message.as_bytes());
        let wallet_address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        let signature_b58 = bs58::encode(signature.to_bytes()).into_string();
        (signature_b58, wallet_address)
    }

    #[test]
    fn test_valid_signature_verifies() {
        let message = "Sign this message to authenticate with StreamFlow";
        let (signature, wallet_address) = signed_payload(message);
        assert!(verify_wallet_signature(&signature, message, &wallet_address));
    }

    #[test]
    fn test_altered_message_fails() {
        let message = "Sign this message to authenticate with StreamFlow";
        let (signature, wallet_address) = signed_payload(message);
        assert!(!verify_wallet_signature(
            &signature,
            "Sign this message to authenticate with streamflow",
            &wallet_address
        ));
    }

    #[test]
    fn test_other_address_fails() {
        let message = "Sign this message to authenticate with StreamFlow";
        let (signature, _) = signed_payload(message);
        let (_, other_address) = signed_payload(message);
        assert!(!verify_wallet_signature(&signature, message, &other_address));
    }

    #[test]
    fn test_malformed_inputs_are_not_valid() {
        let message = "hello";
        let (signature, wallet_address) = signed_payload(message);

        // Not base58 at all
        assert!(!verify_wallet_signature("0OIl", message, &wallet_address));
        assert!(!verify_wallet_signature(&signature, message, "0OIl"));

        // Valid base58 but wrong length for key material
        assert!(!verify_wallet_signature(&signature, message, "abc"));
        assert!(!verify_wallet_signature("abc", message, &wallet_address));
    }
}
