//! Throughput benchmark for the arithmetic operations.

use std::time::{Duration, Instant};

use radix_bignum::{BigNumber, Digit, Sign};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run(
    operation: &str,
    digits: usize,
    seconds: u64,
    base: Digit,
) -> Result<(), Box<dyn std::error::Error>> {
    if digits == 0 {
        return Err("operand size must be at least one digit".into());
    }
    let duration = Duration::from_secs(seconds);
    let mut rng = StdRng::seed_from_u64(0);
    let a = random_number(&mut rng, 2 * digits, base)?;
    let b = random_number(&mut rng, digits, base)?;
    let exponent = BigNumber::from_u64_in(17, base)?;

    match operation {
        "add" => bench_op("add", duration, || Ok(a.add(&b))),
        "mul" => bench_op("mul", duration, || Ok(a.multiply(&b))),
        "div" => bench_op("div", duration, || a.divide(&b).map(|r| r.quotient)),
        "sqrt" => bench_op("sqrt", duration, || a.integer_square_root()),
        "pow" => bench_op("pow", duration, || b.power_big(&exponent)),
        "all" => {
            bench_op("add", duration, || Ok(a.add(&b)))?;
            bench_op("mul", duration, || Ok(a.multiply(&b)))?;
            bench_op("div", duration, || a.divide(&b).map(|r| r.quotient))?;
            bench_op("sqrt", duration, || a.integer_square_root())?;
            bench_op("pow", duration, || b.power_big(&exponent))?;
            Ok(())
        }
        _ => Err(format!(
            "unknown operation: {operation}\n\
             Valid: add, mul, div, sqrt, pow, all"
        )
        .into()),
    }
}

fn random_number(
    rng: &mut StdRng,
    digits: usize,
    base: Digit,
) -> Result<BigNumber, radix_bignum::ArithError> {
    radix_bignum::check_base(base)?;
    let mut raw: Vec<Digit> = (0..digits).map(|_| rng.random_range(0..base)).collect();
    if let Some(top) = raw.last_mut() {
        *top = rng.random_range(1..base);
    }
    BigNumber::from_digits(raw, base, Sign::Positive)
}

fn bench_op<F>(name: &str, duration: Duration, op: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fn() -> Result<BigNumber, radix_bignum::ArithError>,
{
    let start = Instant::now();
    let mut ops: u64 = 0;

    while start.elapsed() < duration || ops == 0 {
        op()?;
        ops += 1;
    }

    let elapsed = start.elapsed().as_secs_f64();
    let per_sec = ops as f64 / elapsed;
    println!("{name:24} {per_sec:12.1} ops/s  ({ops} ops in {elapsed:.2}s)");
    Ok(())
}
