use crate::geodecimate::error::Error;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread;

const QUEUE_SIZE: usize = 500;

// Reader
//   enqueue lines round-robin to worker 1, 2, 3, 1, 2, 3
// Worker
//   push results to its own output queue as they finish
// Printer
//   round-robin blocking read from the worker output queues,
//   which restores input order

pub fn for_stdin_line<F>(handler: F) -> Result<(), Error>
where
    F: Fn(String) -> Result<Vec<String>, Error> + Sync,
{
    let input = BufReader::new(io::stdin());
    let stdout = io::stdout();
    let mut output = stdout.lock();
    for_lines(input, &mut output, num_cpus::get(), handler)
}

/// Runs `handler` over every non-blank input line on `workers` threads and
/// writes the results in input order. The first handler error stops output
/// and is returned.
pub fn for_lines<R, W, F>(input: R, output: &mut W, workers: usize, handler: F) -> Result<(), Error>
where
    R: BufRead + Send,
    W: Write,
    F: Fn(String) -> Result<Vec<String>, Error> + Sync,
{
    let workers = workers.max(1);
    let handler = &handler;

    thread::scope(|s| {
        let mut inputs: Vec<SyncSender<String>> = Vec::with_capacity(workers);
        let mut outputs: Vec<Receiver<Result<Vec<String>, Error>>> = Vec::with_capacity(workers);
        let mut threads = Vec::with_capacity(workers);

        for _ in 0..workers {
            let (input_sender, input_receiver) = sync_channel::<String>(QUEUE_SIZE);
            let (output_sender, output_receiver) = sync_channel(QUEUE_SIZE);
            threads.push(s.spawn(move || {
                for line in input_receiver {
                    if output_sender.send(handler(line)).is_err() {
                        break;
                    }
                }
            }));
            inputs.push(input_sender);
            outputs.push(output_receiver);
        }

        let reader = s.spawn(move || -> Result<(), Error> {
            let mut next = 0;
            for line in input.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                if inputs[next % inputs.len()].send(line).is_err() {
                    break;
                }
                next += 1;
            }
            Ok(())
        });

        let printed = print_in_order(&outputs, output);
        drop(outputs);

        let read = reader.join().map_err(|_| Error::WorkerFailed)?;
        for t in threads {
            t.join().map_err(|_| Error::WorkerFailed)?;
        }
        printed.and(read)
    })
}

fn print_in_order<W: Write>(
    outputs: &[Receiver<Result<Vec<String>, Error>>],
    output: &mut W,
) -> Result<(), Error> {
    loop {
        for receiver in outputs {
            match receiver.recv() {
                Ok(Ok(lines)) => {
                    for line in lines {
                        writeln!(output, "{}", line)?;
                    }
                }
                Ok(Err(e)) => return Err(e),
                // closed queues mean the input is exhausted
                Err(_) => return Ok(()),
            }
        }
    }
}
