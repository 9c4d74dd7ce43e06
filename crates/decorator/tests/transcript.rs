use indoc::indoc;
use micro_decorator::decorator::{AnnounceDecorator, DebugDecorator, Decorator, DecoratorExt, DoTwiceDecorator};
use micro_decorator::sink::{MemorySink, Sink};
use micro_decorator::{Arguments, ArgumentError, Callable, Traced, callable, try_callable, wrap_with};

fn transcript(sink: &MemorySink) -> String {
    sink.lines().iter().map(|line| format!("{line}\n")).collect()
}

fn make_greeting(args: Arguments) -> Result<String, ArgumentError> {
    let name: &str = args.arg(0)?;
    match args.kwarg_opt::<u32>("age")? {
        None => Ok(format!("Howdy {name}!")),
        Some(age) => Ok(format!("Whoa {name}! {age} already, you're growing up!")),
    }
}

#[test]
fn traced_greeting() {
    let sink = MemorySink::new();
    let greet = wrap_with(try_callable(make_greeting), Traced, sink.clone());

    greet.call((Arguments::new().with_arg("Benjamin"),)).unwrap();
    greet.call((Arguments::new().with_arg("Juan").with_kwarg("age", 12),)).unwrap();

    assert_eq!(
        transcript(&sink),
        indoc! {r#"
            Calling make_greeting("Benjamin")
            make_greeting() returned "Howdy Benjamin!"
            Calling make_greeting("Juan", age=12)
            make_greeting() returned "Whoa Juan! 12 already, you're growing up!"
        "#}
    );
}

#[test]
fn traced_argument_error_propagates() {
    let sink = MemorySink::new();
    let greet = wrap_with(try_callable(make_greeting), Traced, sink.clone());

    let err = greet.call((Arguments::new().with_kwarg("age", 12),)).unwrap_err();

    assert!(matches!(err, ArgumentError::MissingPositional { index: 0 }));
    assert_eq!(transcript(&sink), "Calling make_greeting(age=12)\n");
}

#[test]
fn nested_wrappers_run_inside_out() {
    let sink = MemorySink::new();
    let say_whee = {
        let sink = sink.clone();
        callable(move || sink.emit("Whee!")).with_name("say_whee")
    };

    let say_whee = DoTwiceDecorator
        .and_then(DebugDecorator::new().with_sink(sink.clone()))
        .and_then(AnnounceDecorator::new().with_sink(sink.clone()))
        .decorate(say_whee);

    say_whee.call(()).unwrap();

    assert_eq!(
        transcript(&sink),
        indoc! {"
            Something is happening before the function is called.
            Calling say_whee()
            Whee!
            Whee!
            say_whee() returned ()
            Something is happening after the function is called.
        "}
    );
}
