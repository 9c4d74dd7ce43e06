use micro_decorator::decorator::{DebugDecorator, Decorator, DoTwiceDecorator, TimerDecorator};
use micro_decorator::{Behavior, Callable, Named, callable};
use std::env;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn waste_some_time(num_times: u64) -> u64 {
    (0..num_times).map(|_| (0..10_000u64).map(|number| number.pow(2)).sum::<u64>()).sum()
}

fn make_greeting(name: &str, age: Option<Named<u32>>) -> String {
    match age {
        None => format!("Howdy {name}!"),
        Some(age) => format!("Whoa {name}! {} already, you're growing up!", *age),
    }
}

fn return_greeting(name: &str) -> String {
    println!("Creating greeting");
    format!("Hi {name}")
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let greet_twice = DoTwiceDecorator.decorate(callable(return_greeting));
    let hi = greet_twice.call(("Adam",)).unwrap_or_else(|never| match never {});
    info!(greeting = %hi, callable = greet_twice.name(), "do twice");

    let timed = TimerDecorator::new().decorate(callable(waste_some_time));
    timed.call((999,)).unwrap_or_else(|never| match never {});

    let greet = DebugDecorator::new().decorate(callable(make_greeting));
    greet.call(("Benjamin", None)).unwrap_or_else(|never| match never {});
    greet.call(("Juan", Some(Named::new("age", 12)))).unwrap_or_else(|never| match never {});

    // pick any behavior by name: `cargo run --example decorators -- traced`
    if let Some(name) = env::args().nth(1) {
        match name.parse::<Behavior>() {
            Ok(behavior) => {
                let wasted = behavior.wrap(callable(waste_some_time));
                wasted.call((10,)).unwrap_or_else(|never| match never {});
            }
            Err(e) => error!(cause = %e, "invalid behavior"),
        }
    }
}
