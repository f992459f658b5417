use anyhow::Result;
use serde::Serialize;
use twobit_codec::{EncodedSequence, PackedValues, PackingPlan, UnitWidth};

use crate::args::OutputFormat;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn join_widths(units: &[UnitWidth]) -> String {
    units.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

pub fn print_encoded(encoded: &EncodedSequence, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Length: {}", encoded.len());
            println!("Encoded: {}", encoded.value());
            Ok(())
        }
        // decimal string, the value is usually wider than a JSON number
        OutputFormat::Json => print_json(&serde_json::json!({
            "length": encoded.len(),
            "value": encoded.value().to_string(),
        })),
    }
}

pub fn print_sequence(sequence: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{sequence}");
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "length": sequence.len(),
            "sequence": sequence,
        })),
    }
}

pub fn print_plan(plan: &PackingPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let bits = plan.bit_length();
            println!("Sequence length: {}", plan.sequence_len());
            println!("Sequence bits: {}", bits.sequence_bits);
            println!("Padding bits: {}", bits.padding_bits);
            println!("Units: {}", join_widths(plan.units()));
            Ok(())
        }
        OutputFormat::Json => print_json(plan),
    }
}

pub fn print_packed(plan: &PackingPlan, values: &PackedValues, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Plan: {}", join_widths(plan.units()));
            println!("Padding bits: {}", plan.bit_length().padding_bits);
            let units: Vec<String> = values.iter().map(|u| u.get().to_string()).collect();
            println!("Values: {}", units.join(" "));
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "plan": plan,
            "values": values,
        })),
    }
}

pub fn print_mismatches(compared: usize, mismatches: usize, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Compared bases: {compared}");
            println!("Mismatches: {mismatches}");
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "compared": compared,
            "mismatches": mismatches,
        })),
    }
}

pub fn print_tolerance(compared: usize, tolerance: usize, within: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Compared bases: {compared}");
            println!("Tolerance: {tolerance}");
            println!("Within tolerance: {within}");
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "compared": compared,
            "tolerance": tolerance,
            "within_tolerance": within,
        })),
    }
}
