#![allow(non_snake_case)]
/// module for plotting sampled curves with plotters (PNG) or gnuplot
pub mod plots;
