use super::*;

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[test]
fn test_parse_and_display_v4() {
    let a = addr("10.0.0.5");
    assert_eq!(a.family(), Family::V4);
    assert_eq!(a.value(), 0x0A00_0005);
    assert_eq!(a.to_string(), "10.0.0.5");
    assert_eq!(a.octets(), vec![10, 0, 0, 5]);
}

#[test]
fn test_parse_and_display_v6() {
    let a = addr("2001:db8::1");
    assert_eq!(a.family(), Family::V6);
    assert_eq!(a.width(), 128);
    assert_eq!(a.to_string(), "2001:db8::1");
    assert_eq!(a.octets().len(), 16);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("10.0.0".parse::<Address>().is_err());
    assert!("not-an-ip".parse::<Address>().is_err());
    assert!("10.0.0.0/24".parse::<Address>().is_err());
    assert!(" 10.0.0.1".parse::<Address>().is_err());
    assert!("10.0.0.1\n".parse::<Address>().is_err());
}

#[test]
fn test_add_carries_across_octets() {
    assert_eq!(addr("10.0.0.255").wrapping_add(1).to_string(), "10.0.1.0");
    assert_eq!(addr("10.0.255.255").wrapping_add(1).to_string(), "10.1.0.0");
    assert_eq!(addr("10.0.1.0").wrapping_add(-1).to_string(), "10.0.0.255");
}

#[test]
fn test_add_carries_in_v6() {
    assert_eq!(
        addr("2001:db8::ffff").wrapping_add(1).to_string(),
        "2001:db8::1:0"
    );
}

#[test]
fn test_add_wraps_silently_at_edges() {
    assert_eq!(addr("255.255.255.255").wrapping_add(1).to_string(), "0.0.0.0");
    assert_eq!(addr("0.0.0.0").wrapping_add(-1).to_string(), "255.255.255.255");
}

#[test]
fn test_checked_add_detects_overflow() {
    assert!(addr("255.255.255.255").checked_add(1).is_none());
    assert!(addr("0.0.0.0").checked_add(-1).is_none());
    assert_eq!(
        addr("10.0.0.5").checked_add(-5).map(|a| a.to_string()),
        Some("10.0.0.0".to_string())
    );
}

#[test]
fn test_mask_clears_host_bits() {
    assert_eq!(addr("10.1.2.3").mask(24).to_string(), "10.1.2.0");
    assert_eq!(addr("10.1.2.3").mask(16).to_string(), "10.1.0.0");
    assert_eq!(addr("10.1.2.3").mask(32).to_string(), "10.1.2.3");
    assert_eq!(addr("10.1.2.3").mask(0).to_string(), "0.0.0.0");
    assert_eq!(addr("2001:db8::1").mask(0).to_string(), "::");
}
