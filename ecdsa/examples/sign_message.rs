use curve::CurveParams;
use ecdsa::{Ecdsa, Signature};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

fn main() {
    let params_bytes = bincode::serialize(&CurveParams::secp256k1()).expect("serialize params");
    let params: CurveParams = bincode::deserialize(&params_bytes).expect("deserialize params");
    let ecdsa = Ecdsa::new(params).expect("curve");

    let mut rng = StdRng::seed_from_u64(42);
    let sk = ecdsa.generate_private_key(&mut rng).expect("key");
    let pk = ecdsa.private_key_to_public_key(&sk).expect("public key");

    let digest = Sha256::digest(b"hello ecdsa");
    let sig = ecdsa.sign(&sk, &digest).expect("sign");
    println!("signature: {sig}");

    let parsed: Signature = sig.parse().expect("parse");
    let sig_bytes = bincode::serialize(&parsed).expect("serialize sig");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    assert_eq!(sig2.to_hex(), sig);

    assert!(ecdsa.verify(&pk, &digest, &sig).expect("verify"));
    assert_eq!(ecdsa.recover_to_public_key(&digest, &sig).expect("recover"), pk);
}
