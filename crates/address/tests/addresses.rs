use coins_address::prelude::*;

const MULTISIG: &str = "524104\
    91bba2510912a5bd37da1fb5b1673010e43d2c6d812c514e91bfa9f2eb129e1c1833\
    29db55bd868e209aac2fbc02cb33d98fe74bf23f0c235d6126b1d8334f864104865c\
    40293a680cb9c020e7b1e106d8c1916d3cef99aa431a56d253e69256dac09ef122b1\
    a986818a7cb624532f062c1d1f8722084861c5c3291ccffef4ec687441048d2455d2\
    403e08708fc1f556002f1b6cd83f992d085097f9974ab08a28838f07896fbab08f39\
    495e15fa6fad6edbfb1e754e35fa1c7844c41f322a1863d4621353ae";

type Ctor = fn(&[u8], &NetworkParams) -> AddressResult<DecodedAddress>;

#[test]
fn it_decodes_and_reencodes_valid_addresses() {
    let main = NetworkParams::bitcoin_mainnet();
    let test = NetworkParams::bitcoin_testnet();
    let ltc = NetworkParams::litecoin_mainnet();

    let cases: &[(&str, &NetworkParams, Ctor, &str)] = &[
        (
            "1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX",
            &main,
            DecodedAddress::new_pubkey_hash,
            "e34cce70c86373273efcc54ce7d2a491bb4a0e84",
        ),
        (
            "12MzCDwodF9G1e7jfwLXfR164RNtx4BRVG",
            &main,
            DecodedAddress::new_pubkey_hash,
            "0ef030107fd26e0b6bf40512bca2ceb1dd80adaa",
        ),
        (
            "mrX9vMRYLfVy1BnZbc5gZjuyaqH3ZW2ZHz",
            &test,
            DecodedAddress::new_pubkey_hash,
            "78b316a08647d5b77283e512d3603f1f1c8de68f",
        ),
        (
            "LM2WMpR1Rp6j3Sa59cMXMs1SPzj9eXpGc1",
            &ltc,
            DecodedAddress::new_pubkey_hash,
            "13c60d8e68d7349f5b4ca362c3954b15045061b1",
        ),
        (
            "LTC1eqUzePT9uvpvb413Ejd6P8Cx1Ei8Di",
            &ltc,
            DecodedAddress::new_pubkey_hash,
            "57630115300a625f5deaab64100faa5506c1422f",
        ),
        (
            "LTC1f9gtb7bU6B4VjHXvPGDi8ACNZhkKPo",
            &ltc,
            DecodedAddress::new_pubkey_hash,
            "5763023d3f02509644dacbfc45f2c91021297497",
        ),
        (
            "3QJmV3qfvL9SuYo34YihAf3sRCW3qSinyC",
            &main,
            DecodedAddress::new_script_hash_from_hash,
            "f815b036d9bbbce5e9f2a00abd1bf3dc91e95510",
        ),
        (
            "3NukJ6fYZJ5Kk8bPjycAnruZkE5Q7UW7i8",
            &main,
            DecodedAddress::new_script_hash_from_hash,
            "e8c300c87986efa84c37c0519929019ef86eb5b4",
        ),
        (
            "2NBFNJTktNa7GZusGbDbGKRZTxdK9VVez3n",
            &test,
            DecodedAddress::new_script_hash_from_hash,
            "c579342c2c4c9220205e2cdc285617040c924a0a",
        ),
        (
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
            &main,
            DecodedAddress::new_witness_pubkey_hash,
            "751e76e8199196d454941c45d1b3a323f1433bd6",
        ),
        (
            "bc1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3qccfmv3",
            &main,
            DecodedAddress::new_witness_script_hash,
            "1863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262",
        ),
        (
            "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
            &test,
            DecodedAddress::new_witness_pubkey_hash,
            "751e76e8199196d454941c45d1b3a323f1433bd6",
        ),
        (
            "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7",
            &test,
            DecodedAddress::new_witness_script_hash,
            "1863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262",
        ),
        (
            "tb1qqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesrxh6hy",
            &test,
            DecodedAddress::new_witness_script_hash,
            "000000c4a5cad46221b2a187905e5266362b99d5e91c6ce24d165dab93e86433",
        ),
        (
            "ltc1qt6nzjwaqp3nknu5h6xmh58679cjsyqj4gzf8w2",
            &ltc,
            DecodedAddress::new_witness_pubkey_hash,
            "5ea6293ba00c6769f297d1b77a1f5e2e25020255",
        ),
    ];

    for (s, net, ctor, payload) in cases.iter() {
        let decoded = decode_address(s, net).unwrap();
        let payload = hex::decode(payload).unwrap();
        assert_eq!(decoded.script_payload(), &payload[..], "{}", s);
        assert!(decoded.is_for_network(net));

        let built = ctor(&payload, net).unwrap();
        assert_eq!(built, decoded, "{}", s);
        assert_eq!(encode_address(&built).unwrap(), *s);
        assert_eq!(built.to_string(), *s);
    }
}

#[test]
fn it_decodes_uppercase_bech32_to_the_same_value() {
    let main = NetworkParams::bitcoin_mainnet();
    let upper = decode_address("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4", &main).unwrap();
    let lower = decode_address("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4", &main).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.encode().unwrap(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
}

#[test]
fn it_rejects_invalid_addresses() {
    let main = NetworkParams::bitcoin_mainnet();
    let test = NetworkParams::bitcoin_testnet();

    let cases: &[(&str, &NetworkParams, AddressError)] = &[
        (
            "bc1pw508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7k7grplx",
            &main,
            AddressError::UnsupportedWitnessProgram { version: 1, len: 40 },
        ),
        (
            "BC1SW50QA3JX3S",
            &main,
            AddressError::UnsupportedWitnessProgram { version: 16, len: 2 },
        ),
        (
            "bc1zw508d6qejxtdg4y5r3zarvaryvg6kdaj",
            &main,
            AddressError::UnsupportedWitnessProgram { version: 2, len: 16 },
        ),
        (
            "tc1qw508d6qejxtdg4y5r3zarvary0c5xw7kg3g4ty",
            &test,
            AddressError::WrongNetwork {
                got: "tc".to_owned(),
                expected: "tb".to_owned(),
            },
        ),
        (
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
            &test,
            AddressError::WrongNetwork {
                got: "bc".to_owned(),
                expected: "tb".to_owned(),
            },
        ),
        (
            "BC13W508D6QEJXTDG4Y5R3ZARVARY0C5XW7KN40WF2",
            &main,
            EncodingError::InvalidWitnessVersion(17).into(),
        ),
        (
            "bc1rw5uspcuh",
            &main,
            EncodingError::InvalidPadding(Padding::ProgramSize(1)).into(),
        ),
        (
            "bc10w508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7kw5rljs90",
            &main,
            EncodingError::InvalidPadding(Padding::ProgramSize(41)).into(),
        ),
        (
            "BC1QR508D6QEJXTDG4Y5R3ZARVARYV98GJ9P",
            &main,
            EncodingError::InvalidProgramLength { version: 0, len: 16 }.into(),
        ),
        (
            "tb1pw508d6qejxtdg4y5r3zarqfsj6c3",
            &test,
            EncodingError::InvalidPadding(Padding::ExcessBits(6)).into(),
        ),
        (
            "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3pjxtptv",
            &test,
            EncodingError::InvalidPadding(Padding::NonZeroBits).into(),
        ),
        (
            "mrX9vMRYLfVy1BnZbc5gZjuyaqH3ZW2ZHz",
            &main,
            AddressError::UnknownAddressType {
                version: vec![0x6f],
                len: 20,
            },
        ),
    ];

    for (s, net, err) in cases.iter() {
        assert_eq!(decode_address(s, net).as_ref(), Err(err), "{}", s);
    }
}

#[test]
fn it_reports_the_failing_layer() {
    let main = NetworkParams::bitcoin_mainnet();
    let test = NetworkParams::bitcoin_testnet();

    match decode_address("1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gY", &main) {
        Err(AddressError::InvalidAddress {
            base58: EncodingError::ChecksumMismatch { .. },
            ..
        }) => {}
        other => panic!("{:?}", other),
    }
    match decode_address(
        "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sL5k7",
        &test,
    ) {
        Err(AddressError::InvalidAddress {
            bech32: EncodingError::MixedCase,
            ..
        }) => {}
        other => panic!("{:?}", other),
    }
    match decode_address("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5", &main) {
        Err(AddressError::InvalidAddress {
            bech32: EncodingError::InvalidChecksum,
            ..
        }) => {}
        other => panic!("{:?}", other),
    }
}

#[test]
fn it_never_truncates_hashes() {
    let main = NetworkParams::bitcoin_mainnet();
    let hash = hex::decode("000ef030107fd26e0b6bf40512bca2ceb1dd80adaa").unwrap();
    assert_eq!(hash.len(), 21);

    let ctors: [Ctor; 2] = [
        DecodedAddress::new_pubkey_hash,
        DecodedAddress::new_script_hash_from_hash,
    ];
    for ctor in ctors.iter() {
        assert_eq!(
            ctor(&hash, &main),
            Err(AddressError::InvalidHashLength {
                expected: 20,
                got: 21
            })
        );
    }
}

#[test]
fn it_hashes_scripts_for_p2sh() {
    let main = NetworkParams::bitcoin_mainnet();
    let script = hex::decode(MULTISIG).unwrap();
    let addr = DecodedAddress::new_script_hash(&script, &main).unwrap();
    assert_eq!(
        hex::encode(addr.hash160().unwrap()),
        "f815b036d9bbbce5e9f2a00abd1bf3dc91e95510"
    );
    assert_eq!(addr.to_string(), "3QJmV3qfvL9SuYo34YihAf3sRCW3qSinyC");

    // the same script commits to a different hash on a blake256 network
    let blake = NetworkParams {
        id: NetworkId::new("blake-net"),
        pub_key_hash_version: vec![0x07, 0x3f],
        script_hash_version: vec![0x07, 0x1a],
        bech32_hrp: "bk".to_owned(),
        checksum: ChecksumAlgorithm::DoubleBlake256,
    };
    let other = DecodedAddress::new_script_hash(&script, &blake).unwrap();
    assert_ne!(other.hash160(), addr.hash160());
    assert_eq!(decode_address(&other.to_string(), &blake).unwrap(), other);
}

#[test]
fn it_selects_the_checksum_per_network() {
    let hash = hex::decode("e34cce70c86373273efcc54ce7d2a491bb4a0e84").unwrap();
    let main = NetworkParams::bitcoin_mainnet();
    let mut sha3 = NetworkParams::bitcoin_mainnet();
    sha3.id = NetworkId::new("sha3-net");
    sha3.checksum = ChecksumAlgorithm::Sha3_256;

    let addr = DecodedAddress::new_pubkey_hash(&hash, &sha3).unwrap();
    assert_eq!(addr.to_string(), "1MirQ9bwyQcGVJPwKUgapu5ouK2E5da9Lr");
    assert_eq!(decode_address("1MirQ9bwyQcGVJPwKUgapu5ouK2E5da9Lr", &sha3).unwrap(), addr);

    // each network rejects the other's checksum
    assert!(decode_address("1MirQ9bwyQcGVJPwKUgapu5ouK2E5da9Lr", &main).is_err());
    assert!(decode_address("1MirQ9bwyQcGVJPwKUgapu5ouK2E2Ey4gX", &sha3).is_err());
}

#[test]
fn it_round_trips_every_variant_on_every_builtin_network() {
    let registry = NetworkRegistry::with_defaults();
    for net in registry.iter() {
        let addrs = [
            DecodedAddress::new_pubkey_hash(&[0x11; 20], net).unwrap(),
            DecodedAddress::new_script_hash_from_hash(&[0x22; 20], net).unwrap(),
            DecodedAddress::new_witness_pubkey_hash(&[0x33; 20], net).unwrap(),
            DecodedAddress::new_witness_script_hash(&[0x44; 32], net).unwrap(),
        ];
        for addr in addrs.iter() {
            let s = addr.encode().unwrap();
            assert_eq!(&decode_address(&s, net).unwrap(), addr, "{} on {}", s, net.id);
        }
    }
}

#[test]
fn it_decodes_against_a_registry_loaded_from_json() {
    let json = r#"[
        {"id": "litecoin-mainnet", "pub_key_hash_version": [48], "script_hash_version": [50], "bech32_hrp": "ltc"},
        {"id": "bitcoin-mainnet", "pub_key_hash_version": [0], "script_hash_version": [5], "bech32_hrp": "bc", "checksum": "double_sha256"}
    ]"#;
    let registry: NetworkRegistry = serde_json::from_str(json).unwrap();
    assert_eq!(registry.len(), 2);

    let addr = registry.decode_address("LM2WMpR1Rp6j3Sa59cMXMs1SPzj9eXpGc1").unwrap();
    assert_eq!(addr.network().id.as_str(), "litecoin-mainnet");
    let addr = registry.decode_address("3QJmV3qfvL9SuYo34YihAf3sRCW3qSinyC").unwrap();
    assert_eq!(addr.network(), registry.get("bitcoin-mainnet").unwrap());
}
