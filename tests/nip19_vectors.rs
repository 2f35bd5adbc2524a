//! Published NIP-19 / NIP-06 vectors through the public API.

use nostr_identity_utility::{
    decode, encode_composite, encode_simple, from_nostr_uri, get_public_key_hex, AddressPointer,
    CompositeIdentifier, EventPointer, Nip19Entity, Nip19Error, Prefix, ProfilePointer,
    SimpleKind,
};

const FIATJAF_HEX: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";
const FIATJAF_NPUB: &str = "npub180cvv07tjdrrgpa0j7j7tmnyl2yr6yr7l8j4s3evf6u64th6gkwsyjh6w6";

fn fiatjaf() -> [u8; 32] {
    hex::decode(FIATJAF_HEX).unwrap().try_into().unwrap()
}

#[test]
fn npub_vector() {
    assert_eq!(
        encode_simple(SimpleKind::PublicKey, FIATJAF_HEX).unwrap(),
        FIATJAF_NPUB
    );
    let entity = decode(FIATJAF_NPUB).unwrap();
    assert_eq!(entity.prefix(), Prefix::Npub);
    assert_eq!(
        entity,
        Nip19Entity::Simple {
            kind: SimpleKind::PublicKey,
            bytes: fiatjaf()
        }
    );
}

#[test]
fn nip06_vector() {
    let sk = "7f7ff03d123792d6ac594bfa67bf6d0c0ab55b6b1fdb6249303fe861f1ccba9a";
    let pk = get_public_key_hex(sk).unwrap();
    assert_eq!(
        pk,
        "17162c921dc4d2518f9a101db33695df1afb56ab82f5ff3e5da6eec3ca5cd917"
    );
    assert_eq!(
        encode_simple(SimpleKind::SecretKey, sk).unwrap(),
        "nsec10allq0gjx7fddtzef0ax00mdps9t2kmtrldkyjfs8l5xruwvh2dq0lhhkp"
    );
    assert_eq!(
        encode_simple(SimpleKind::PublicKey, &pk).unwrap(),
        "npub1zutzeysacnf9rru6zqwmxd54mud0k44tst6l70ja5mhv8jjumytsd2x7nu"
    );
}

#[test]
fn note_of_zero_id() {
    assert_eq!(
        encode_simple(SimpleKind::Note, &"00".repeat(32)).unwrap(),
        "note1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqn2l0z3"
    );
}

#[test]
fn nevent_vector() {
    let id: [u8; 32] = std::array::from_fn(|i| i as u8);
    let pointer = EventPointer::new(id)
        .relay("wss://relay.damus.io")
        .author(fiatjaf())
        .kind(1);
    let expected = "nevent1qqsqqqgzqvzq2ps8pqys5zcvp58q7yq3zgf3g9gkzuvpjxsmrsw3u8cpz3mhxue69uhhyetvv9ujuerpd46hxtnfdupzqwlsccluhy6xxsr6l9a9uhhxf75g85g8a709tprjcn4e42h053vaqvzqqqqqqyagnweu";
    let composite = CompositeIdentifier::from(pointer);
    assert_eq!(encode_composite(&composite).unwrap(), expected);
    assert_eq!(decode(expected).unwrap(), Nip19Entity::Composite(composite));
}

#[test]
fn naddr_vector() {
    let pointer = AddressPointer::new(fiatjaf(), 30023, "test");
    let expected =
        "naddr1qqz8getnwspzqwlsccluhy6xxsr6l9a9uhhxf75g85g8a709tprjcn4e42h053vaqvzqqqr4guwzpuu3";
    assert_eq!(pointer.to_bech32().unwrap(), expected);
    assert_eq!(
        decode(expected).unwrap(),
        Nip19Entity::Composite(pointer.into())
    );
}

#[test]
fn nprofile_uri_vector() {
    let uri = "nostr:nprofile1qqsrhuxx8l9ex335q7he0f09aej04zpazpl0ne2cgukyawd24mayt8gpp4mhxue69uhhytnc9e3k7mgpz4mhxue69uhkg6nzv9ejuumpv34kytnrdaksjlyr9p";
    let expected = ProfilePointer::new(fiatjaf()).relays(["wss://r.x.com", "wss://djbas.sadkb.com"]);
    assert_eq!(
        from_nostr_uri(uri).unwrap(),
        Nip19Entity::Composite(expected.into())
    );
}

#[test]
fn typed_errors_instead_of_aborts() {
    assert!(matches!(
        decode("ncryptsec1qgg9947rlpvqu76pj5ecreduf9jxhselq2nae2kghhvd5g7dgjtcxfqtd67p9m0w57lspw8gsq6yphnm8623nsl8xn9j4jdzz84zm3frztj3z7s35vpzmqf6ksu8r89qk5z2zxfmu5gv8th8wclt0h4p"),
        Err(Nip19Error::UnsupportedOrUnimplemented(_))
    ));
    assert!(matches!(
        decode("nprofile1qqqqqqqqqq"),
        Err(Nip19Error::ChecksumMismatch)
    ));
}
