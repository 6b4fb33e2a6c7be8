use gridpath::{
    Grid,
    solve,
    solve_rows,
};
use rand::Rng;
use tracing_subscriber;

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_thread_ids(true)
        .with_thread_names(true)
        .try_init();
}

fn main() {
    println!("Running gridpath example");
    setup_tracing();

    // 1. Generate a grid with a profitable band along the diagonal
    let mut rng = rand::thread_rng();
    let nrows = 12;
    let ncols = 20;
    let rows: Vec<Vec<f64>> = (0..nrows)
        .map(|r| {
            (0..ncols)
                .map(|c| {
                    let on_band = (r as f64 / nrows as f64 - c as f64 / ncols as f64).abs() < 0.2;
                    let base = if on_band { 8.0 } else { 1.0 };
                    base + rng.gen_range(0.0..2.0)
                })
                .collect()
        })
        .collect();

    println!("Generated a {}x{} grid.", nrows, ncols);

    // 2. Solve it
    let grid = Grid::new(&rows).expect("generated grid should be rectangular and finite");
    let solution = solve(&grid);

    solution.display_heatmap(&grid);
    println!("Terminal profit: {:.2}", solution.terminal_profit());
    println!(
        "Route length to the terminal cell: {}",
        solution.terminal_path().len()
    );

    // Example with a ragged grid
    println!("\n--- Testing error case (ragged rows) ---");
    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    match solve_rows(&ragged) {
        Ok(_) => println!("This should have failed!"),
        Err(e) => eprintln!("Correctly failed with error: {:?}", e),
    }
}
