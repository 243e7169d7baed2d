use defarg::{CommandLineParser, Parameter};

fn main() {
    let parser = CommandLineParser::new()
        .add(Parameter::string("name", "name", "n", "world"))
        .add(Parameter::int("times", "times", "t", 1))
        .build();
    let values = parser.parse();

    let name = values.string_value("name").unwrap();
    let times = values.int_value("times").unwrap();

    for _ in 0..times {
        println!("Hello, {name}!");
    }
}
