use splice::{option_set, OptionSet};

option_set! {
    pub struct ShippingOptions: u32 {
        #[allow(dead_code)]
        enum Options {
            NextDay,
            SecondDay,
            Priority,
            Standard,
        }
    }
}

#[test]
fn flags_follow_declaration_order() {
    assert_eq!(ShippingOptions::NextDay.raw_value(), 1 << 0);
    assert_eq!(ShippingOptions::SecondDay.raw_value(), 1 << 1);
    assert_eq!(ShippingOptions::Priority.raw_value(), 1 << 2);
    assert_eq!(ShippingOptions::Standard.raw_value(), 1 << 3);
}

#[test]
fn new_and_default_are_empty() {
    assert_eq!(ShippingOptions::new().raw_value(), 0);
    assert_eq!(ShippingOptions::default().raw_value(), 0);
}

#[test]
fn conformance_provides_set_algebra() {
    let mut options = ShippingOptions::new();
    options.insert(ShippingOptions::Priority);
    assert!(options.contains(ShippingOptions::Priority));
    assert!(!options.contains(ShippingOptions::Standard));

    let both = ShippingOptions::NextDay.union(ShippingOptions::SecondDay);
    assert_eq!(both.raw_value(), 0b11);
}

#[test]
fn raw_value_round_trips() {
    let options = ShippingOptions::from_raw_value(0b101);
    assert!(options.contains(ShippingOptions::NextDay));
    assert!(options.contains(ShippingOptions::Priority));
    assert!(!options.contains(ShippingOptions::SecondDay));
}

mod without_annotation {
    use splice::option_set;

    // No raw-storage annotation: nothing is synthesized and the declaration
    // expands as written.
    option_set! {
        pub struct Bare {
            #[allow(dead_code)]
            enum Options {
                A,
            }
        }
    }

    #[test]
    fn declaration_still_exists() {
        let _ = Bare;
    }
}
