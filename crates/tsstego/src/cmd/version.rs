use tsstego::codec::{CHANNELS_PER_PIXEL, HEADER_SIZE};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("tsstego {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: tsstego");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("TSSTEGO_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("frame: {HEADER_SIZE}-byte little-endian length prefix");
    println!("packing: 3-2-3 bits per {CHANNELS_PER_PIXEL}-channel pixel, alpha untouched");
    println!("cipher: aes-128-cfb");

    Ok(SUCCESS)
}
