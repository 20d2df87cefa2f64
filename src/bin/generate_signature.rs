//! Generates a throwaway keypair and a signed login payload for manual
//! testing against `POST /api/verify`.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

const LOGIN_MESSAGE: &str = "Sign this message to authenticate with StreamFlow";

fn main() {
    let signing_key = SigningKey::generate(&mut OsRng);
    let signature = signing_key.sign(LOGIN_MESSAGE.as_bytes());

    let wallet_address = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
    let signature_b58 = bs58::encode(signature.to_bytes()).into_string();

    println!("Test data for authentication:");
    println!("----------------------------");
    println!("Message: {LOGIN_MESSAGE}");
    println!("Signature (base58): {signature_b58}");
    println!("Wallet address: {wallet_address}");
    println!();
    println!("Request body for /api/verify:");
    let payload = serde_json::json!({
        "signature": signature_b58,
        "message": LOGIN_MESSAGE,
        "walletAddress": wallet_address,
    });
    println!("{payload:#}");
}
