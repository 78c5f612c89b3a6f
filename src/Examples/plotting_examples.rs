// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::plots::{plot_series, plot_series_gnuplot};
use crate::app::{PlotEvent, PlotterApp};
use crate::plotting::normalizer::normalize;
use crate::plotting::sampler::{Domain, sample, sample_over};
use crate::symbolic::symbolic_engine::Expr;
use std::path::Path;

#[allow(dead_code)]
pub fn plotting_examples(example: usize) {
    match example {
        0 => {
            // PARSE AND EVALUATE AN EXPRESSION
            // parse expression from string to symbolic expression
            let input = "x^2 + sin(x)";
            let parsed_expression = Expr::parse_expression(input).unwrap();
            println!(" parsed_expression {}", parsed_expression);
            // which variables does it reference?
            let all = parsed_expression.all_arguments_are_variables();
            println!("all arguments are variables {:?}", all);
            // convert symbolic expression to a Rust function and evaluate it
            let f = parsed_expression.lambdify1D();
            println!("f(1.0) = {}", f(1.0));
            // substitute the variable with a value symbolically instead
            let at_one = parsed_expression.set_variable("x", 1.0);
            println!("substituted: {}", at_one);
        }
        1 => {
            // NORMALIZE AND SAMPLE OVER A DOMAIN
            // user text may carry whitespace and Python-style powers
            let raw = " x ** 2 - 2 * x + 1 ";
            let normalized = normalize(raw);
            println!("normalized '{}' -> '{}'", raw, normalized);
            let (x, y) = sample(&normalized, -2.0, 2.0, 0.1).unwrap();
            println!("sampled {} points, first (x, y) = ({}, {})", x.len(), x[0], y[0]);
            // the same step by step: domain first, then evaluation
            let domain = Domain::new(-2.0, 2.0).unwrap();
            let (x2, _y2) = sample_over(&normalized, &domain).unwrap();
            assert_eq!(x.len(), x2.len());
        }
        2 => {
            // FULL APPLICATION FLOW WITH EVENT HANDLERS
            let mut app = PlotterApp::new();
            app.set_loglevel(Some("info"));
            app.on_event(|event| match event {
                PlotEvent::Status(msg) => println!("STATUS: {}", msg),
                PlotEvent::Failure(err) => println!("ERROR: {}", err),
            });
            app.set_expression("exp(-x) * sin(10 * x)");
            app.set_min_x("0");
            app.set_max_x("5");
            match app.plot() {
                Ok(path) => println!("saved to {}", path.display()),
                Err(_) => println!("plot failed, see the ERROR line above"),
            }
        }
        3 => {
            // RENDER THE SAME CURVE WITH BOTH BACKENDS
            let (x, y) = sample("cos(x)", 0.0, 6.28, 0.1).unwrap();
            plot_series("cos(x)", &x, &y, Path::new("cos_plotters.png"), (800, 600)).unwrap();
            // needs the gnuplot binary on PATH
            plot_series_gnuplot("cos(x)", &x, &y, Path::new("cos_gnuplot.png"), (800, 600))
                .unwrap();
        }
        _ => println!("no such example: {}", example),
    }
}
