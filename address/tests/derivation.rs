use address::{
    Address, AddressError, MAINNET_P2PKH, PAYLOAD_LEN, TESTNET_P2PKH, address_from_sec1, base58,
    derive_address, derive_address_with, hash,
};
use curve::{BigUint, CurveError, CurveParams, Point};
use hex_literal::hex;
use proptest::prelude::*;
use ripemd::Ripemd160;
use sha2::Sha256;

const DEMO_ADDRESS: &str = "1JryTePceSiWVpoNBU8SbwiT7J4ghzijzW";

const DEMO_PUBKEY: [u8; 65] = hex!(
    "04"
    "0791dc70b75aa995213244ad3f4886d74d61ccd3ef658243fcad14c9ccee2b0a"
    "a762fbc6ac0921b8f17025bb8458b92794ae87a133894d70d7995fc0b6b5ab90"
);

fn demo_key(curve: &CurveParams) -> Point {
    let d = BigUint::parse_bytes(
        b"A0DC65FFCA799873CBEA0AC274015B9526505DAAAED385155425F7337704883E",
        16,
    )
    .expect("hex");
    curve.mul_generator(&d).expect("public key")
}

// -------------------------------------------------------
// DERIVATION
// -------------------------------------------------------

#[test]
fn derive_demo_address() {
    let curve = CurveParams::secp256k1();
    let address = derive_address(&curve, &demo_key(&curve)).expect("derive");

    assert_eq!(address.to_string(), DEMO_ADDRESS);
    assert_eq!(address.as_str(), DEMO_ADDRESS);
    assert_eq!(address.version(), MAINNET_P2PKH);
    assert_eq!(
        address.pubkey_hash(),
        hex!("c3eda67f2731a3d0bcb5ce89ee795f419745a1f7")
    );
    assert_eq!(
        address.payload(),
        hex!("00c3eda67f2731a3d0bcb5ce89ee795f419745a1f79839ff27")
    );
}

#[test]
fn derive_from_sec1_bytes() {
    let curve = CurveParams::secp256k1();
    let address = address_from_sec1(&curve, &DEMO_PUBKEY).expect("derive");
    assert_eq!(address.to_string(), DEMO_ADDRESS);
    assert_eq!(hash::hash160(&DEMO_PUBKEY), address.pubkey_hash());
}

#[test]
fn derive_generator_address() {
    let curve = CurveParams::secp256k1();
    let address = derive_address(&curve, curve.generator()).expect("derive");
    assert_eq!(address.to_string(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
}

#[test]
fn derive_testnet_address() {
    let curve = CurveParams::secp256k1();
    let address = derive_address_with::<Sha256, Ripemd160>(&curve, &demo_key(&curve), TESTNET_P2PKH)
        .expect("derive");

    assert_eq!(address.to_string(), "myNvkhUbTU9mGwGyu36pRrvmyHfPfF7pve");
    assert_eq!(address.version(), TESTNET_P2PKH);
}

#[test]
fn derive_rejects_infinity() {
    let curve = CurveParams::secp256k1();
    assert_eq!(
        derive_address(&curve, &Point::Infinity),
        Err(AddressError::Curve(CurveError::PointAtInfinity))
    );
}

#[test]
fn derive_rejects_off_curve_sec1() {
    let curve = CurveParams::secp256k1();
    let mut bytes = DEMO_PUBKEY;
    bytes[64] ^= 1;
    assert_eq!(
        address_from_sec1(&curve, &bytes),
        Err(AddressError::Curve(CurveError::NotOnCurve))
    );

    assert_eq!(
        address_from_sec1(&curve, &DEMO_PUBKEY[..33]),
        Err(AddressError::Curve(CurveError::InvalidEncoding))
    );
}

// -------------------------------------------------------
// PARSING
// -------------------------------------------------------

#[test]
fn parse_roundtrip() {
    let parsed: Address = DEMO_ADDRESS.parse().expect("parse");
    assert_eq!(parsed.version(), MAINNET_P2PKH);
    assert_eq!(
        parsed.pubkey_hash(),
        hex!("c3eda67f2731a3d0bcb5ce89ee795f419745a1f7")
    );

    let curve = CurveParams::secp256k1();
    assert_eq!(parsed, derive_address(&curve, &demo_key(&curve)).expect("derive"));
}

#[test]
fn parse_detects_checksum_mismatch() {
    let mut payload = base58::decode(DEMO_ADDRESS, PAYLOAD_LEN).expect("decode");
    payload[PAYLOAD_LEN - 1] ^= 0x01;
    let tampered = base58::encode(&payload);

    assert_eq!(Address::parse(&tampered), Err(AddressError::ChecksumMismatch));
}

#[test]
fn parse_rejects_bad_characters() {
    let with_zero = DEMO_ADDRESS.replacen('J', "0", 1);
    assert_eq!(
        Address::parse(&with_zero),
        Err(AddressError::InvalidCharacter { ch: '0', index: 1 })
    );
}

#[test]
fn parse_rejects_oversized_payload() {
    let long = format!("{DEMO_ADDRESS}zz");
    assert_eq!(
        Address::parse(&long),
        Err(AddressError::PayloadTooLong { width: PAYLOAD_LEN })
    );
}

// -------------------------------------------------------
// BASE58 LEADING ZEROS
// -------------------------------------------------------

#[test]
fn two_leading_zero_bytes_yield_one_symbol() {
    let encoded = base58::encode(&hex!("0000010203"));
    assert_eq!(encoded, "1Ldp");
    assert_eq!(encoded.chars().take_while(|&c| c == '1').count(), 1);
}

#[test]
fn single_version_byte_yields_one_symbol() {
    assert!(DEMO_ADDRESS.starts_with('1'));
    assert!(!DEMO_ADDRESS.starts_with("11"));
}

proptest! {
    #[test]
    fn leading_ones_count_started_zero_pairs(
        zeros in 0usize..8,
        tail in proptest::collection::vec(1u8..=255, 1..8),
    ) {
        let mut payload = vec![0u8; zeros];
        payload.extend(&tail);

        let encoded = base58::encode(&payload);
        let ones = encoded.chars().take_while(|&c| c == '1').count();
        let tail_ones = base58::encode(&tail).chars().take_while(|&c| c == '1').count();
        prop_assert_eq!(ones, zeros.div_ceil(2) + tail_ones);

        prop_assert_eq!(base58::decode(&encoded, payload.len()).expect("decode"), payload);
    }

    #[test]
    fn derived_addresses_parse_back(seed in 1u64..u64::MAX) {
        let curve = CurveParams::secp256k1();
        let key = curve.mul_u64(curve.generator(), seed).expect("public key");
        let address = derive_address(&curve, &key).expect("derive");

        let parsed: Address = address.to_string().parse().expect("parse");
        prop_assert_eq!(parsed, address);
    }
}
