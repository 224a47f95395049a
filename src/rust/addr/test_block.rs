use super::*;

#[test]
fn test_parse_masks_to_network() {
    let block: Block = "10.0.0.255/24".parse().unwrap();
    assert_eq!(block.network().to_string(), "10.0.0.0");
    assert_eq!(block.prefix(), 24);
    assert_eq!(block.to_string(), "10.0.0.0/24");
}

#[test]
fn test_capacity() {
    let cases = [
        ("10.0.0.0/32", 1u128),
        ("10.0.0.0/31", 2),
        ("10.0.0.0/24", 256),
        ("10.0.0.0/16", 65_536),
        ("0.0.0.0/0", 1 << 32),
        ("2001:db8::/64", 1 << 64),
    ];

    for (input, expected) in cases {
        let block: Block = input.parse().unwrap();
        assert_eq!(block.capacity(), expected, "capacity of {}", input);
    }
}

#[test]
fn test_capacity_saturates_for_whole_v6_space() {
    let block: Block = "::/0".parse().unwrap();
    assert_eq!(block.capacity(), u128::MAX);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "10.0.0.0".parse::<Block>(),
        Err(BlockParseError::MissingPrefix)
    );
    assert!(matches!(
        "10.0.0/24".parse::<Block>(),
        Err(BlockParseError::InvalidAddress(_))
    ));
    assert!(matches!(
        "10.0.0.0/abc".parse::<Block>(),
        Err(BlockParseError::InvalidPrefix(_))
    ));
    assert!(matches!(
        "10.0.0.0/+8".parse::<Block>(),
        Err(BlockParseError::InvalidPrefix(_))
    ));
    assert_eq!(
        "10.0.0.0/33".parse::<Block>(),
        Err(BlockParseError::PrefixTooLong {
            prefix: 33,
            width: 32
        })
    );
    assert!("2001:db8::/129".parse::<Block>().is_err());
    assert!(matches!(
        " 10.0.0.0/24".parse::<Block>(),
        Err(BlockParseError::InvalidAddress(_))
    ));
    assert!(matches!(
        "10.0.0.0/24 ".parse::<Block>(),
        Err(BlockParseError::InvalidPrefix(_))
    ));
}

#[test]
fn test_host_bits() {
    let block: Block = "10.0.0.0/20".parse().unwrap();
    assert_eq!(block.host_bits(), 12);
    assert_eq!(block.capacity_wrapping(), 4096);

    let whole: Block = "::/0".parse().unwrap();
    assert_eq!(whole.host_bits(), 128);
    assert_eq!(whole.capacity_wrapping(), 0);
}
