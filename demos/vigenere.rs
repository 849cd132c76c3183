use vigenere::Vigenere;

const KEY: &str = "WHYRUST";

fn main() -> Result<(), vigenere::KeyError> {
    let cipher = Vigenere::new(KEY)?;

    let plain_text = "TO EMPOWER EVERYONE";
    let cipher_text = cipher.encrypt(plain_text);
    println!("Encrypting '{}' with key '{}' gives '{}'.", plain_text, KEY, cipher_text);

    let cipher_text = "PV CDJGPAY CMYJRKUC";
    let plain_text = cipher.decrypt(cipher_text);
    println!("Decrypting '{}' with key '{}' gives '{}'.", cipher_text, KEY, plain_text);

    Ok(())
}
