use curve::{BigUint, CurveParams};
use ecdsa::{KeyPair, NonceLedger, Signature, SigningKey, VerifyingKey};

fn main() {
    let curve = CurveParams::secp256k1();

    let private_key = BigUint::parse_bytes(
        b"A0DC65FFCA799873CBEA0AC274015B9526505DAAAED385155425F7337704883E",
        16,
    )
    .expect("hex");
    let keys = KeyPair::new(&curve, private_key).expect("key pair");

    let public_key = keys.verifying_key().to_sec1_bytes(&curve).expect("encode");
    println!("Uncompressed public key: {}", hex::encode(&public_key));

    // Never use the same nonce twice. The ledger refuses a second use.
    let nonce = BigUint::parse_bytes(
        b"e3ff52793f79f8036eab643bfd8ad66f17b80f08b46fd79c91719d69149e1b5f",
        16,
    )
    .expect("hex");
    let mut ledger = NonceLedger::new();

    let message = b"This is incredibly random";
    let sig = keys
        .signing_key()
        .sign_guarded(&curve, message, &nonce, &mut ledger)
        .expect("sign");
    println!("r = {:x}", sig.r);
    println!("s = {:x}", sig.s);

    let sk_bytes = bincode::serialize(keys.signing_key()).expect("serialize sk");
    let vk_bytes = bincode::serialize(keys.verifying_key()).expect("serialize vk");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = vk2.verify(&curve, message, &sig2);
    println!("signature valid: {ok}");
    assert!(ok);

    let reuse = sk2.sign_guarded(&curve, b"another message", &nonce, &mut ledger);
    println!("second use of the nonce: {reuse:?}");
}
