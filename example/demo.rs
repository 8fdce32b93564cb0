use futures::executor::block_on;
use splice::{add_async, four_character_code, option_set, stringify, OptionSet};

option_set! {
    pub struct SundaeToppings: u32 {
        #[allow(dead_code)]
        enum Options {
            Nuts,
            Cherry,
            Fudge,
        }
    }
}

#[add_async]
fn fetch_motd(day: u32, completion: impl FnOnce(Result<String, String>) + Send + 'static) {
    std::thread::spawn(move || {
        if day % 7 == 0 {
            completion(Err("closed on sundays".to_string()));
        } else {
            completion(Ok(format!("sundae of the day #{day}")));
        }
    });
}

fn main() {
    let a = 17;
    let b = 25;
    let (value, source) = stringify!(a + b);
    println!("the value {value} was produced by the code {source:?}");

    let magic = four_character_code!("ABCD");
    println!("magic number = {magic}");

    let mut order = SundaeToppings::new();
    order.insert(SundaeToppings::Nuts);
    order.insert(SundaeToppings::Fudge);
    println!("toppings raw value = {:#05b}", order.raw_value());

    match block_on(fetch_motd_async(3)) {
        Ok(motd) => println!("{motd}"),
        Err(err) => println!("no sundae: {err}"),
    }
}
