#![allow(non_snake_case)]
use RustedPlotter::app::{PlotEvent, PlotterApp};
use std::io::{self, Write};

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None; // EOF
    }
    Some(line.trim().to_string())
}

fn main() {
    let mut app = PlotterApp::new();
    app.set_loglevel(Some("info"));
    app.on_event(|event| match event {
        PlotEvent::Status(msg) => println!("{}", msg),
        PlotEvent::Failure(err) => println!("Error: {}", err),
    });

    println!("Function Plotter");
    println!("Enter a function of x (e.g. x^2 + sin(x)); an empty function exits.\n");

    loop {
        let Some(function) = prompt("Function: ") else {
            break;
        };
        if function.is_empty() {
            break;
        }
        app.set_expression(&function);

        let Some(min_x) = prompt("Min X: ") else {
            break;
        };
        app.set_min_x(&min_x);

        let Some(max_x) = prompt("Max X: ") else {
            break;
        };
        app.set_max_x(&max_x);

        // errors are not fatal: correct the input and plot again
        if let Ok(path) = app.plot() {
            println!("saved to {}\n", path.display());
        } else {
            println!();
        }
    }
}
