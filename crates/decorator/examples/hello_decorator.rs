use micro_decorator::decorator::{AnnounceDecorator, DecorateExt, Decorator};
use micro_decorator::{Callable, callable};

fn say_whee() {
    println!("Whee!");
}

fn main() {
    // without `decorate_with`: hand the function to the decorator yourself
    let say_whee_by_hand = AnnounceDecorator::new().decorate(callable(say_whee));
    say_whee_by_hand.call(()).unwrap_or_else(|never| match never {});

    let say_whee = callable(say_whee).decorate_with(AnnounceDecorator::new());
    say_whee.call(()).unwrap_or_else(|never| match never {});
}
