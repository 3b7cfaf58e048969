use std::error::Error;

use matrix_core::{DenseMatrix, Matrix, MatrixError};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting dense matrix example...");

    let a = DenseMatrix::from_array(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = DenseMatrix::from_array(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    println!("A =\n{}", a);
    println!("B =\n{}", b);

    println!("A + B =\n{}", (&a + &b)?);
    println!("A - B =\n{}", (&a - &b)?);
    println!("A * B =\n{}", (&a * &b)?);

    // Identity built element by element
    let mut identity = DenseMatrix::new(a.cols(), a.cols())?;
    for i in 0..a.cols() {
        identity.set(i, i, 1.0)?;
    }
    let unchanged = a.multiply(&identity)?;
    log::info!("A * I == A: {}", unchanged == a);

    // Failure paths
    match a.get(2, 0) {
        Err(err @ MatrixError::IndexOutOfRange { .. }) => log::warn!("{}", err),
        other => log::error!("Unexpected result: {:?}", other),
    }
    let wide = DenseMatrix::new(2, 3)?;
    if let Err(err) = &wide + &a {
        log::warn!("{}", err);
    }
    let empty = DenseMatrix::from_array(Vec::new())?;
    if let Err(err) = a.multiply(&empty) {
        log::warn!("{}", err);
    }

    log::info!("Done.");
    Ok(())
}
