use ntmass::algorithm::ratio::{derive_all, pair_sums};
use ntmass::data::config::RatioConfig;
use ntmass::data::table::{
    render_composition_check, render_equation_check, render_pair_summary, render_table,
};
use ntmass::error::RatioResult;

fn run() -> RatioResult<()> {
    let config = RatioConfig::codata();
    let records = derive_all(&config)?;
    print!("{}", render_table(&records, &config.columns)?);

    let sums = pair_sums(&records, &config.column_names())?;
    println!("\n--- Equation Check ---");
    print!("{}", render_pair_summary(&sums, &config.columns)?);
    println!();
    print!("{}", render_equation_check(&sums));
    print!("{}", render_composition_check(&sums)?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
