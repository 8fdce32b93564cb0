use splice::{four_character_code, stringify};

#[test]
fn stringify_produces_value_and_source() {
    let a = 17;
    let b = 25;
    let (value, source) = stringify!(a + b);
    assert_eq!(value, 42);
    assert_eq!(source, "a + b");
}

#[test]
fn stringify_spliced_expression_is_evaluated_in_place() {
    let mut calls = 0;
    let mut bump = || {
        calls += 1;
        calls
    };
    let (value, source) = stringify!(bump());
    assert_eq!(value, 1);
    assert_eq!(calls, 1);
    assert_eq!(source, "bump ()");
}

#[test]
fn four_character_code_packs_big_endian() {
    const ABCD: u32 = four_character_code!("ABCD");
    assert_eq!(ABCD, 1094861636);
    assert_eq!(four_character_code!("avc1"), 0x6176_6331);
    assert_eq!(four_character_code!("\x01\x02\x03\x04"), 0x0102_0304);
}
