/*
  shunt, a sliding-block puzzle solver.
  Copyright (C) 2026 The Shunt Authors

  shunt is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  shunt is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

mod map;
mod report;

use std::{env, process::ExitCode, time::Instant};

use shunt_search::{find_solution, Config, SearchLimit};

use map::load_map;
use report::Report;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "solve" if args.len() >= 3 => {
            let algorithm = args.get(2).and_then(|s| s.parse::<u8>().ok()).unwrap_or(3);
            let Some(path) = args.get(3) else {
                eprintln!("solve requires a map path");
                return ExitCode::FAILURE;
            };
            run_solve(algorithm, path)
        }
        "check" if args.len() >= 3 => run_check(&args[2]),
        _ => {
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_solve(algorithm: u8, path: &str) -> ExitCode {
    let board = match load_map(path) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("could not load map {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::with_algorithm(algorithm);
    let limit = SearchLimit::new();
    let start = Instant::now();
    let solution = match find_solution(&board, config, &limit) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("search failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed().as_secs_f64();

    let solved = solution.solved;
    print!("{}", Report::new(solution, board, elapsed));
    if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_check(path: &str) -> ExitCode {
    match load_map(path) {
        Ok(board) => {
            println!("map ok: {} piece(s), {}x{}", board.num_pieces(), board.lines(), board.width());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("map {path} is invalid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("usage:");
    eprintln!("  shunt solve <algorithm:1|2|3> <map-path>");
    eprintln!("  shunt check <map-path>");
}
