use std::env;
use std::process;

use biclust_edit::common::print_matrix;
use biclust_edit::{
    compute_bi_clusters, random_weights, save_bi_clusters_as_xml, Algorithm, BiClustering,
    ConstructiveHeuristic, Result, SolverName, WeightMatrix,
};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <matrix-file> <delimiter> [options]");
    eprintln!("   or: {program} --random <num-rows> <num-cols> <threshold> <seed> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --alg <CH|ILP>       solver to run per component (default CH)");
    eprintln!("  --save <file.xml>    write the bi-clusters as XML");
    eprintln!("  --time-limit <secs>  time limit for the exact solver (default 60)");
    eprintln!("  --tune               tune the exact model before optimizing");
    eprintln!("  --print-matrix       print the instance matrix");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    // Instance source: a matrix file or a seeded random instance.
    let (weights, instance_descr, options_start) = if args[1] == "--random" {
        if args.len() < 6 {
            usage(&args[0]);
        }
        let num_rows = parse_or_usage(args, 2);
        let num_cols = parse_or_usage(args, 3);
        let threshold: f64 = parse_or_usage(args, 4);
        let seed: u64 = parse_or_usage(args, 5);
        let weights = random_weights(num_rows, num_cols, threshold, seed)?;
        let descr = format!("random num_rows={num_rows} num_cols={num_cols} threshold={threshold} seed={seed}");
        (weights, descr, 6)
    } else {
        let weights = WeightMatrix::load_csv(&args[1], &args[2])?;
        (weights, args[1].clone(), 3)
    };

    let mut algorithm = Algorithm::default();
    let mut save_path = None;
    let mut show_matrix = false;
    let mut pos = options_start;
    while pos < args.len() {
        match args[pos].as_str() {
            "--alg" => {
                algorithm.solver = next_value(args, &mut pos).parse()?;
            }
            "--save" => {
                save_path = Some(next_value(args, &mut pos).to_string());
            }
            "--time-limit" => {
                algorithm.time_limit = parse_or_usage(args, pos + 1);
                pos += 1;
            }
            "--tune" => {
                algorithm.tune = true;
            }
            "--print-matrix" => {
                show_matrix = true;
            }
            _ => usage(&args[0]),
        }
        pos += 1;
    }

    print_instance_stats(&weights);
    if show_matrix {
        print_matrix(weights.as_array());
    }

    let result = match algorithm.solver {
        SolverName::Heuristic => {
            compute_bi_clusters(&weights, &ConstructiveHeuristic, &algorithm.params())
        }
        SolverName::Exact => {
            eprintln!("the exact solver is an external backend; implement the Solver trait and call compute_bi_clusters directly");
            process::exit(1);
        }
    };

    print_result_stats(&result);
    if let Some(path) = save_path {
        save_bi_clusters_as_xml(&path, &result, &instance_descr)?;
        println!("Bi-clusters written to {path}");
    }
    Ok(())
}

fn next_value<'a>(args: &'a [String], pos: &mut usize) -> &'a str {
    *pos += 1;
    if *pos >= args.len() {
        usage(&args[0]);
    }
    &args[*pos]
}

fn parse_or_usage<T: std::str::FromStr>(args: &[String], pos: usize) -> T {
    if pos >= args.len() {
        usage(&args[0]);
    }
    args[pos].parse().unwrap_or_else(|_| usage(&args[0]))
}

fn print_instance_stats(weights: &WeightMatrix) {
    let num_rows = weights.num_rows();
    let num_cols = weights.num_cols();
    let mut num_edges = 0;
    for row in 0..num_rows {
        for col in 0..num_cols {
            if weights.weight(row, col) > 0.0 {
                num_edges += 1;
            }
        }
    }

    println!("# Instance");
    println!("num_rows: {num_rows}");
    println!("num_cols: {num_cols}");
    println!("sign edges: {num_edges}");
    println!("edge density: {:.3}", num_edges as f64 / (num_rows * num_cols) as f64);
}

fn print_result_stats(result: &BiClustering) {
    let num_singletons = result
        .bi_clusters()
        .iter()
        .filter(|bi_cluster| bi_cluster.is_singleton())
        .count();

    println!("# Bi-clusters");
    println!("count: {}", result.bi_clusters().len());
    println!("singletons: {num_singletons}");
    println!("obj_val: {}", result.obj_val());
    println!("is_optimal: {}", result.is_optimal());
    if result.bi_clusters().len() <= 20 {
        for (id, bi_cluster) in result.bi_clusters().iter().enumerate() {
            println!("bi-cluster {id}: {bi_cluster}");
        }
    }
}
