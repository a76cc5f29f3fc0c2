use banded_aligner::{cli::Cli, config::DNA, prelude::*, stats::AlignStats};
use clap::Parser;
use std::{
    fs::File,
    io::{BufWriter, Write},
    ops::ControlFlow,
    process::ExitCode,
    time::Instant,
};

fn run(args: Cli) -> Result<()> {
    let aligner = Aligner::new(args.align_params()?);
    log::debug!("Parameters: {:?}", aligner.params);

    let mut avg_result = AlignStats::default();
    let mut results = vec![];
    let start = Instant::now();

    // Process the input.
    args.input.process_input_pairs(|a: Seq, b: Seq| {
        validate(a, DNA)?;
        validate(b, DNA)?;

        // Run the pair.
        let (r, stats) = aligner.align_with_stats(a, b);

        // Record and print stats.
        if args.silent <= 1 {
            print!("\r");
            if args.silent == 0 {
                print!("{r}");
            }
        }
        avg_result += stats;
        if args.silent <= 1 {
            avg_result.print_no_newline();
        }
        if args.output.is_some() {
            results.push(r);
        }

        match args.timeout {
            Some(d) if start.elapsed() > d => {
                log::info!("Timeout of {d:?} reached after {} pairs", avg_result.sample_size);
                Ok(ControlFlow::Break(()))
            }
            _ => Ok(ControlFlow::Continue(())),
        }
    })?;

    if avg_result.sample_size > 0 {
        print!("\r");
        avg_result.print();
    }

    if let Some(output) = &args.output {
        let f = File::create(output).map_err(|e| Error::io(output, e))?;
        let mut writer = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut writer, &results)?;
        writer.flush().map_err(|e| Error::io(output, e))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
