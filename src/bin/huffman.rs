use std::io::{self, Read};

use clap::Parser;
use huffman_tree::{Code, Config, HuffmanTree};

/// Build a Huffman tree from a string and print its codes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to build the tree from (read from stdin when omitted)
    text: Option<String>,

    /// Print the tree structure
    #[arg(long)]
    tree: bool,

    /// Print the encoding of the input text
    #[arg(long)]
    encode: bool,

    /// Decode a code of L/R directions against the tree
    #[arg(long, value_name = "CODE")]
    decode: Option<String>,

    /// Maximum accepted input length in characters
    #[arg(long, default_value_t = Config::default().max_input_len)]
    max_len: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let config = Config::new().with_max_input_len(args.max_len);
    let tree = HuffmanTree::build_with(&text, &config)?;

    if args.tree {
        print!("{}", tree);
    }
    print!("{}", tree.code_table()?);

    if args.encode {
        println!("{}", tree.encode(&text)?);
    }

    if let Some(code) = args.decode {
        let code: Code = code.parse()?;
        println!("{}", tree.decode(&code)?);
    }

    Ok(())
}
