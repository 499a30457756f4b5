use tsstego::image::PngCodec;
use tsstego::DecodeJob;

use crate::cmd::{cipher_config, DecodeArgs};
use crate::exit::{stego_error, CliResult, SUCCESS};
use crate::output::{print_decode, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let job = DecodeJob {
        image: args.image,
        reference: args.xor,
        output: args.output,
        cipher: cipher_config(args.plain, args.password),
    };

    let report =
        tsstego::decode(&PngCodec::new(), &job).map_err(|err| stego_error("decode failed", err))?;
    print_decode(&report, format);
    Ok(SUCCESS)
}
