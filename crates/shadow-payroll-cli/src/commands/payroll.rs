use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use shadow_payroll_core::calculations;
use shadow_payroll_core::payroll::PayrollInput;
use shadow_payroll_core::pe_risk;

/// Arguments for the deterministic base conversion
#[derive(Args)]
pub struct BaseCalcArgs {
    /// Annual home base salary in USD
    #[arg(long)]
    pub salary_usd: Decimal,

    /// Assignment duration in months
    #[arg(long)]
    pub duration_months: u32,

    /// Annual housing allowance in USD
    #[arg(long, default_value = "0")]
    pub housing_usd: Decimal,

    /// Annual school allowance in USD
    #[arg(long, default_value = "0")]
    pub school_usd: Decimal,

    /// USD to host-currency exchange rate
    #[arg(long)]
    pub fx_rate: Decimal,

    /// Home country name
    #[arg(long, default_value = "United States")]
    pub home_country: String,

    /// Host country name
    #[arg(long)]
    pub host_country: String,

    /// Employee relocates with a dependent spouse
    #[arg(long)]
    pub has_spouse: bool,

    /// Number of dependent children
    #[arg(long, default_value_t = 0)]
    pub num_children: u32,
}

pub fn run_base_calc(args: BaseCalcArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = PayrollInput {
        home_country: args.home_country,
        host_country: args.host_country,
        salary_usd: args.salary_usd,
        duration_months: args.duration_months,
        has_spouse: args.has_spouse,
        num_children: args.num_children,
        housing_usd: args.housing_usd,
        school_usd: args.school_usd,
    };
    let base = calculations::calculate_base(&input, args.fx_rate)?;
    let summary = calculations::calculate_summary(&input, &base);
    Ok(serde_json::to_value(summary)?)
}

/// Arguments for the PE risk screen
#[derive(Args)]
pub struct PeRiskArgs {
    /// Assignment duration in months
    #[arg(long)]
    pub duration_months: u32,

    /// Treaty-specific PE day threshold (defaults to the 183-day convention)
    #[arg(long)]
    pub threshold_days: Option<u32>,
}

pub fn run_pe_risk(args: PeRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let indicator = match args.threshold_days {
        Some(threshold) => {
            pe_risk::assess_pe_risk_with_threshold(args.duration_months, threshold)
        }
        None => pe_risk::assess_pe_risk(args.duration_months),
    };
    Ok(serde_json::to_value(indicator)?)
}
