use anyhow::{bail, Context, Result};
use twobit_codec::{Codec, PackedUnit, PackedValues, UnitWidth};

use crate::args::{OutputFormat, UnpackArgs};
use crate::printing::{print_packed, print_plan, print_sequence};

pub fn show_plan(codec: &Codec, length: usize, format: OutputFormat) -> Result<()> {
    let plan = codec
        .packing_plan(length)
        .context("Failed to compute packing plan")?;
    print_plan(&plan, format)
}

pub fn pack_sequence(codec: &Codec, sequence: &str, format: OutputFormat) -> Result<()> {
    let values = codec.pack(sequence).context("Failed to pack sequence")?;
    let plan = codec.packing_plan(sequence)?;
    print_packed(&plan, &values, format)
}

pub fn unpack_values(codec: &Codec, args: UnpackArgs, format: OutputFormat) -> Result<()> {
    let plan = codec
        .packing_plan(args.length)
        .context("Failed to compute packing plan")?;

    // Give each value the width the plan expects at its position; surplus
    // values are left for the codec to reject as a length mismatch.
    let mut units = Vec::with_capacity(args.units.len());
    for (index, &value) in args.units.iter().enumerate() {
        let width = plan.units().get(index).copied().unwrap_or(UnitWidth::U64);
        if value & !width.mask() != 0 {
            bail!("Value {value} at position {index} does not fit in a {width} unit");
        }
        units.push(PackedUnit::truncate(width, value));
    }

    let sequence = codec
        .decode((&PackedValues::new(units), args.length))
        .context("Failed to unpack values")?;
    print_sequence(&sequence, format)
}
