use tsstego::image::PngCodec;

use crate::cmd::CapacityArgs;
use crate::exit::{stego_error, CliResult, SUCCESS};
use crate::output::{print_capacity, OutputFormat};

pub fn run(args: CapacityArgs, format: OutputFormat) -> CliResult<i32> {
    let report = tsstego::capacity(&PngCodec::new(), &args.image)
        .map_err(|err| stego_error("capacity failed", err))?;
    print_capacity(&report, format);
    Ok(SUCCESS)
}
