// Copyright The Arboretum Developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! An exact maximum clique solver over DIMACS (.col) instance files.

use std::process;
use std::time::Instant;

use arboretum::problems::{maxclique, Mode};
use arboretum::{Solution, UndirectedGraph};
use clap::Parser;

/// This structure uses `clap-derive` annotations and defines the arguments
/// that can be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the DIMACS instance file
    #[clap(short, long)]
    file: String,
    /// The tree search mode (recursion | backtrack)
    #[clap(short, long, default_value = "backtrack")]
    mode: String,
    /// The node log frequency of the iterative driver
    #[clap(short, long, default_value = "100000")]
    log: usize,
}

fn main() {
    let args = Args::parse();
    let graph = UndirectedGraph::read_dimacs(&args.file).unwrap_or_else(|error| {
        eprintln!("{}", error);
        process::exit(1);
    });
    println!("Vertices: {}", graph.vertices());
    println!("Edges: {}", graph.edges());

    match args.mode.parse() {
        Ok(Mode::Recursion) => {
            let start = Instant::now();
            let solution = maxclique::solve_recursive(&graph);
            println!("Time: {:.3} seconds", start.elapsed().as_secs_f64());
            match solution {
                Some(solution) => println!(
                    "Solution: {}   Objective: {}",
                    solution,
                    solution.objective_value()
                ),
                None => println!("Solution: [ ]   Objective: 0"),
            }
        }
        Ok(Mode::Backtrack) => {
            let pool = maxclique::solve_backtrack(&graph, args.log);
            println!("Solution Pool:");
            for solution in pool.iter() {
                println!("  (Obj = {})  {}", solution.objective_value(), solution);
            }
        }
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}
