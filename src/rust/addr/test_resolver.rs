use super::*;

fn single(first: &str, index: i64) -> String {
    match resolve(first, index, None).unwrap() {
        Resolved::Single(s) => s,
        other => panic!("expected single address, got {:?}", other),
    }
}

fn range(first: &str, index: i64, count: i64) -> Vec<String> {
    match resolve(first, index, Some(count)).unwrap() {
        Resolved::Range(list) => list,
        other => panic!("expected range, got {:?}", other),
    }
}

#[test]
fn test_single_index_in_block() {
    assert_eq!(single("10.0.0.0/24", 5), "10.0.0.5");
    assert_eq!(single("10.0.0.0/24", 0), "10.0.0.0");
    assert_eq!(single("10.0.0.0/24", 255), "10.0.0.255");
}

#[test]
fn test_negative_index_counts_from_end_of_block() {
    assert_eq!(single("10.0.0.0/24", -1), "10.0.0.255");
    assert_eq!(single("10.0.0.0/24", -256), "10.0.0.0");
}

#[test]
fn test_negative_index_wraparound_law() {
    let block = "192.168.4.0/26";
    let capacity = 64;
    for i in 0..capacity {
        assert_eq!(single(block, i), single(block, i - capacity), "index {}", i);
    }
}

#[test]
fn test_host_bits_are_masked_before_arithmetic() {
    assert_eq!(single("10.0.0.255/24", 1), "10.0.0.1");
    assert_eq!(single("10.0.0.77/24", -1), "10.0.0.255");
}

#[test]
fn test_index_carries_across_octets() {
    assert_eq!(single("10.0.0.0/16", 256), "10.0.1.0");
    assert_eq!(single("10.0.0.0/16", 65_535), "10.0.255.255");
}

#[test]
fn test_index_equal_to_capacity_is_accepted() {
    // |index| <= capacity; the address just past the block is reachable.
    assert_eq!(single("10.0.0.0/24", 256), "10.0.1.0");
}

#[test]
fn test_index_beyond_capacity_fails() {
    for index in [257, -257, 1_000, i64::MIN, i64::MAX] {
        let err = resolve("10.0.0.0/24", index, None).unwrap_err();
        assert!(
            matches!(err, RangeError::IndexOutOfBlock { .. }),
            "index {}: {:?}",
            index,
            err
        );
        assert!(err.is_bounds());
    }
}

#[test]
fn test_index_error_message_names_block() {
    let err = resolve("10.0.0.0/24", 300, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "start index 300 exceeds size of block 10.0.0.0/24"
    );
}

#[test]
fn test_range_in_block() {
    assert_eq!(
        range("10.0.0.0/24", 0, 3),
        vec!["10.0.0.0", "10.0.0.1", "10.0.0.2"]
    );
}

#[test]
fn test_range_is_strictly_increasing_from_start() {
    let list = range("10.1.0.0/22", 250, 12);
    assert_eq!(list.len(), 12);
    assert_eq!(list[0], single("10.1.0.0/22", 250));
    for (offset, addr) in list.iter().enumerate() {
        assert_eq!(addr, &single("10.1.0.0/22", 250 + offset as i64));
    }
    assert_eq!(list[5], "10.1.0.255");
    assert_eq!(list[6], "10.1.1.0");
}

#[test]
fn test_range_with_negative_start() {
    assert_eq!(
        range("10.0.0.0/24", -3, 3),
        vec!["10.0.0.253", "10.0.0.254", "10.0.0.255"]
    );
}

#[test]
fn test_range_filling_whole_block() {
    let list = range("10.0.0.0/30", 0, 4);
    assert_eq!(list, vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]);
}

#[test]
fn test_range_exceeding_block_fails() {
    let err = resolve("10.0.0.0/24", 250, Some(10)).unwrap_err();
    assert_eq!(
        err,
        RangeError::RangeOutOfBlock {
            index: 250,
            count: 10,
            block: "10.0.0.0/24".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "start index 250 and count 10 would exceed size of block 10.0.0.0/24"
    );
}

#[test]
fn test_range_reports_wrapped_start() {
    let err = resolve("10.0.0.0/24", -2, Some(3)).unwrap_err();
    assert!(matches!(err, RangeError::RangeOutOfBlock { index: 254, .. }));
}

#[test]
fn test_zero_or_negative_count_yields_empty_range() {
    assert_eq!(range("10.0.0.0/24", 0, 0), Vec::<String>::new());
    assert_eq!(range("10.0.0.0/24", 4, -2), Vec::<String>::new());
    assert_eq!(range("10.0.0.5", 0, 0), Vec::<String>::new());
}

#[test]
fn test_bare_address_skips_bounds_checks() {
    assert_eq!(single("10.0.0.5", -1), "10.0.0.4");
    assert_eq!(single("10.0.0.5", 1_000), "10.0.3.237");
    assert_eq!(
        range("10.0.0.254", 0, 4),
        vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
    );
}

#[test]
fn test_bare_address_wraps_silently() {
    assert_eq!(single("0.0.0.0", -1), "255.255.255.255");
    assert_eq!(single("255.255.255.255", 2), "0.0.0.1");
}

#[test]
fn test_strict_policy_rejects_wraparound_on_bare_address() {
    let strict = RangePolicy::strict();

    let err = resolve_with(strict, "0.0.0.0", -1, None).unwrap_err();
    assert!(matches!(err, RangeError::OutsideAddressSpace { .. }));
    assert!(err.is_bounds());

    let err = resolve_with(strict, "255.255.255.254", 0, Some(3)).unwrap_err();
    assert!(matches!(err, RangeError::OutsideAddressSpace { offset: 2, .. }));

    assert_eq!(
        resolve_with(strict, "10.0.0.5", -1, None).unwrap(),
        Resolved::Single("10.0.0.4".to_string())
    );
}

#[test]
fn test_strict_policy_leaves_blocks_alone() {
    let strict = RangePolicy::strict();
    assert_eq!(
        resolve_with(strict, "10.0.0.0/24", -1, None).unwrap(),
        resolve("10.0.0.0/24", -1, None).unwrap()
    );
}

#[test]
fn test_v6_block() {
    assert_eq!(single("2001:db8::/64", 1), "2001:db8::1");
    assert_eq!(single("2001:db8::/120", -1), "2001:db8::ff");
    assert_eq!(
        range("2001:db8::/120", 0xfe, 2),
        vec!["2001:db8::fe", "2001:db8::ff"]
    );
}

#[test]
fn test_v6_whole_space_negative_index() {
    assert_eq!(single("::/0", -1), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    assert_eq!(single("::/1", -1), "7fff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
}

#[test]
fn test_parse_error() {
    for input in [
        "",
        "nope",
        "10.0.0.0/33",
        "10.0.0.256",
        "10.0.0.0/",
        " 10.0.0.1",
        " 10.0.0.0/24 ",
    ] {
        let err = resolve(input, 0, None).unwrap_err();
        assert!(matches!(err, RangeError::Parse { .. }), "{}", input);
        assert!(!err.is_bounds());
    }
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let a = resolve("172.16.0.0/12", 4096, Some(8)).unwrap();
    let b = resolve("172.16.0.0/12", 4096, Some(8)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.addresses(), b.addresses());
    assert!(!a.is_single());
}

#[test]
fn test_v4_mapped_bare_address_stays_v6() {
    assert_eq!(
        resolve("::ffff:10.0.0.1", 1, None).unwrap(),
        Resolved::Single("::ffff:10.0.0.2".to_string())
    );
}
