use image::error::ImageError;

use prquad_img::{Bound, QuadtreeNode};

use std::fs::File;

use std::io::Write;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// `clap`-based CLI for compressing images into QT leaf lists.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	let clap_matches = clap::App::new("prquad_img")
		.version("0.1.0")
		.about("Compresses an image into a plain-text list of uniform-color quadtree regions (QT).")
		.arg_from_usage("<INPUT> 'Path to input image'")
		.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a modified file extension'")
		.get_matches();

	let input_path = clap_matches.value_of("INPUT").unwrap();
	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgb();

	let tree = match QuadtreeNode::build(&source, Bound::full(source.height(), source.width())) {
		Ok(t) => t,
		// TODO: Pad non-square/non-power-of-two images up to the next clean size
		Err(_) => error_exit("Input image has invalid dimensions", 4)
	};
	eprintln!("{} leaves for {} pixels", tree.leaf_count(), source.width() * source.height());

	let qt_data = tree.to_qt(source.height(), source.width());
	let mut out_fh = match File::create(clap_matches.value_of("OUTPUT")
		.unwrap_or(&(input_path.rsplitn(2, '.').last().unwrap().to_string() + ".qt"))) {
		Ok(f) => f,
		Err(_) => error_exit("Could not open output file", 3)
	};
	match out_fh.write_all(&qt_data) {
		Ok(_) => (),
		Err(_) => error_exit("Could not write to output file", 3)
	}
}
