//! Whole-search scenarios run against every algorithm.

use std::collections::HashSet;

use pathviz_core::{Board, Point};

use crate::{Algorithm, AlgorithmRunner, AlgorithmStep, RunnerState, Stepper};

fn run_all(algorithm: Algorithm, board: &Board, start: Point, end: Point) -> Vec<AlgorithmStep> {
    algorithm.stepper(board.clone(), start, end).steps().collect()
}

fn parse(s: &str) -> (Board, Point, Point) {
    let (board, start, end) = Board::parse(s);
    (board, start.unwrap(), end.unwrap())
}

fn final_path(algorithm: Algorithm, board: &Board, start: Point, end: Point) -> Vec<Point> {
    let mut r = AlgorithmRunner::new(algorithm, board, start, end);
    r.start();
    while r.next().is_some() {}
    assert_eq!(r.state(), RunnerState::Found, "{algorithm} did not reach the end");
    r.path().unwrap().to_vec()
}

#[test]
fn open_grid_bfs_shortest_path() {
    let board = Board::new(5, 5);
    let (start, end) = (Point::new(0, 0), Point::new(4, 4));
    let steps = run_all(Algorithm::Bfs, &board, start, end);
    assert_eq!(steps.iter().filter(|s| s.found).count(), 1);
    assert!(steps.last().unwrap().found);
    let path = steps.last().unwrap().path(start, end).unwrap();
    assert_eq!(path.len(), 9);
    assert_eq!(path[0], start);
    assert_eq!(path[8], end);
}

#[test]
fn solid_wall_row_exhausts_every_algorithm() {
    let (board, start, end) = parse(
        "
        ..S..
        .....
        #####
        .....
        ..E..
        ",
    );
    for a in Algorithm::ALL {
        let steps = run_all(a, &board, start, end);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| !s.found), "{a}");
        // Exactly the ten cells above the wall get processed.
        assert_eq!(steps.len(), 10, "{a}");

        let mut r = AlgorithmRunner::new(a, &board, start, end);
        r.start();
        while r.next().is_some() {}
        assert_eq!(r.state(), RunnerState::Exhausted, "{a}");
        assert!(r.path().is_none());
    }
}

#[test]
fn adjacent_end_found_on_second_step() {
    let (board, start, end) = parse(
        "
        SE..
        #...
        ",
    );
    for a in Algorithm::ALL {
        let steps = run_all(a, &board, start, end);
        assert_eq!(steps.len(), 2, "{a}");
        assert!(!steps[0].found);
        assert!(steps[1].found);
        assert_eq!(steps[1].path(start, end), Some(vec![start, end]));
    }
}

#[test]
fn walled_in_start_finds_adjacent_end_in_any_direction() {
    // The end is the only open neighbour of the start, so every algorithm
    // processes the start and then the end.
    let boards = [
        ".E.\n#S#\n.#.",
        ".#.\n#S#\n.E.",
        ".#.\nES#\n.#.",
        ".#.\n#SE\n.#.",
    ];
    for text in boards {
        let (board, start, end) = parse(text);
        for a in Algorithm::ALL {
            let steps = run_all(a, &board, start, end);
            assert_eq!(steps.len(), 2, "{a} on {text:?}");
            assert_eq!(steps[0].current, start);
            assert!(steps[1].found, "{a} on {text:?}");
            assert_eq!(steps[1].path(start, end), Some(vec![start, end]));
        }
    }
}

#[test]
fn greedy_takes_the_long_corridor() {
    // Greedy commits to the winding lower corridor because every cell in it
    // looks closer than the first cell of the upper detour.
    let (board, start, end) = parse(
        "
        .............
        .###########.
        S.#...#...#.E
        #...#...#...#
        ",
    );
    let bfs = final_path(Algorithm::Bfs, &board, start, end);
    let greedy = final_path(Algorithm::Greedy, &board, start, end);
    assert_eq!(bfs.len(), 17);
    assert_eq!(greedy.len(), 19);
    assert!(greedy.len() > bfs.len());
    assert!(greedy.iter().all(|p| p.row >= 2));
}

#[test]
fn searches_are_deterministic() {
    let (board, start, end) = parse(
        "
        S....#....
        .##..#.##.
        ..#....#..
        .##.####..
        ......#..E
        ",
    );
    for a in Algorithm::ALL {
        assert_eq!(
            run_all(a, &board, start, end),
            run_all(a, &board, start, end),
            "{a}"
        );
    }
}

#[test]
fn runners_on_identical_inputs_agree() {
    let (board, start, end) = parse(
        "
        S....#....
        .##..#.##.
        ..#....#..
        .##.####..
        ......#..E
        ",
    );
    let record = |a: Algorithm| {
        let mut r = AlgorithmRunner::new(a, &board, start, end);
        let mut steps: Vec<AlgorithmStep> = r.start().cloned().into_iter().collect();
        while let Some(step) = r.next() {
            steps.push(step.clone());
        }
        (steps, r.state(), r.path().map(<[Point]>::to_vec))
    };
    for a in Algorithm::ALL {
        let first = record(a);
        let second = record(a);
        assert!(!first.0.is_empty(), "{a}");
        assert_eq!(first.1, RunnerState::Found, "{a}");
        assert_eq!(first, second, "{a}");
    }
}

#[test]
fn step_invariants_hold() {
    let (board, start, end) = parse(
        "
        S....#....
        .##..#.##.
        ..#....#..
        .##.####..
        ......#..E
        ",
    );
    for a in Algorithm::ALL {
        let steps = run_all(a, &board, start, end);
        let mut seen = HashSet::new();
        for (i, step) in steps.iter().enumerate() {
            // Each node is yielded as current at most once and is visited in
            // its own snapshot.
            assert!(seen.insert(step.current), "{a}: {} twice", step.current);
            assert!(step.visited.is_set(step.current));
            // Visited cells are exactly the currents seen so far.
            assert_eq!(step.visited.count(|&v| v), seen.len(), "{a}");
            assert_eq!(step.parent.at(start), Some(None));

            if let Some(prev) = i.checked_sub(1).map(|j| &steps[j]) {
                for (p, &v) in prev.visited.iter() {
                    if v {
                        assert!(step.visited.is_set(p), "{a}: {p} unvisited");
                    }
                }
                // Parent links never change once set.
                for (p, link) in prev.parent.iter() {
                    if link.is_some() {
                        assert_eq!(step.parent.at(p), Some(*link), "{a}: {p} reparented");
                    }
                }
            }
        }
        let last = steps.last().unwrap();
        assert!(last.found, "{a}");
        assert_eq!(steps.iter().filter(|s| s.found).count(), 1);

        let path = last.path(start, end).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])), "{a}");
        assert!(path.iter().all(|&p| !board.is_wall(p)), "{a}");
    }
}

#[test]
fn bfs_path_is_never_longer() {
    let (board, start, end) = parse(
        "
        S....#....
        .##..#.##.
        ..#....#..
        .##.####..
        ......#..E
        ",
    );
    let bfs = final_path(Algorithm::Bfs, &board, start, end);
    for a in Algorithm::ALL {
        assert!(final_path(a, &board, start, end).len() >= bfs.len(), "{a}");
    }
}
