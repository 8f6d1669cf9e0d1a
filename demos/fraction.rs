use dotenv::dotenv;
use fraction::Fraction;
use std::env;

fn main() -> anyhow::Result<()> {
    // logging
    dotenv().ok();
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    env::set_var("RUST_LOG", log_level);
    tracing_subscriber::fmt::init();

    let half = Fraction::new(1, 2)?;
    let quarter = Fraction::new(4, 16)?;
    tracing::debug!(%half, %quarter, "built operands");

    let sum = half.checked_add(&quarter)?;
    println!("{} + {} = {}", half, quarter, sum);
    println!("{}\n", sum.visualize());

    let quotient = Fraction::new(-7, 11)?.checked_div(&Fraction::new(5, 6)?)?;
    println!("{}", quotient);
    println!("{}\n", quotient.visualize());

    let difference = Fraction::new(2, 3)? - Fraction::new(-1, 6)?;
    println!("{} (whole part {})", difference, difference.whole_part());

    match half.checked_div(&Fraction::default()) {
        Ok(fraction) => println!("{}", fraction),
        Err(e) => tracing::warn!("cannot divide {} by zero: {}", half, e),
    }

    Ok(())
}
