use tsstego::codec::Mode;
use tsstego::image::PngCodec;
use tsstego::EncodeJob;

use crate::cmd::{cipher_config, EncodeArgs};
use crate::exit::{stego_error, CliResult, SUCCESS};
use crate::output::{print_encode, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let job = EncodeJob {
        payload: args.payload,
        carrier: args.carrier,
        output: args.output,
        mode: if args.xor { Mode::Xor } else { Mode::Overwrite },
        cipher: cipher_config(args.plain, args.password),
    };

    let report =
        tsstego::encode(&PngCodec::new(), &job).map_err(|err| stego_error("encode failed", err))?;
    print_encode(&report, format);
    Ok(SUCCESS)
}
