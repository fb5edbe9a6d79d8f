//! Day 11: Reactor

use ahash::AHashMap;

use crate::day::{Answer, Solve};
use crate::error::{ParseError, ParseErrorType, SolveError};
use crate::parse::{numbered_lines, split_once};

const YOU: &str = "you";
const SERVER_RACK: &str = "svr";
const OUT: &str = "out";
const CONVERTERS: [&str; 2] = ["dac", "fft"];

pub struct Reactor;

impl Solve for Reactor {
    fn number(&self) -> u8 {
        11
    }

    fn title(&self) -> &'static str {
        "Reactor"
    }

    fn solve(&self, input: &str) -> Result<Answer, SolveError> {
        let devices = Devices::parse(input)?;
        debug!("{} devices", devices.names.len());
        let part1 = devices.count_paths(YOU, OUT, &[])?;
        let part2 = devices.count_paths(SERVER_RACK, OUT, &CONVERTERS)?;
        Ok(Answer::new(part1, part2))
    }
}

/// The devices and the devices their outputs are attached to
struct Devices {
    names: Vec<String>,
    index: AHashMap<String, usize>,
    outputs: Vec<Vec<usize>>,
}

impl Devices {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let mut devices = Self {
            names: Vec::new(),
            index: AHashMap::new(),
            outputs: Vec::new(),
        };
        for (line_no, line) in numbered_lines(input) {
            let (name, outputs) = split_once(line, ":", line_no)?;
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(ParseError::new(ParseErrorType::InvalidToken, name, line_no));
            }
            let device = devices.intern(name);
            for output in outputs.split_whitespace() {
                let output = devices.intern(output);
                devices.outputs[device].push(output);
            }
        }
        Ok(devices)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        self.outputs.push(Vec::new());
        i
    }

    /// Counts the paths from `start` to `end` that pass through every device in `required`.
    /// A device that doesn't appear in the list has no paths through it.
    fn count_paths(&self, start: &str, end: &str, required: &[&str]) -> Result<u64, SolveError> {
        let lookup = |name: &str| self.index.get(name).copied();
        let (start, end) = match (lookup(start), lookup(end)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Ok(0),
        };
        let required = match required
            .iter()
            .map(|&name| lookup(name))
            .collect::<Option<Vec<_>>>()
        {
            Some(required) => required,
            None => return Ok(0),
        };
        let mut counter = PathCounter {
            devices: self,
            end,
            required,
            memo: AHashMap::new(),
        };
        counter.count(start, 0)
    }
}

enum Visit {
    InProgress,
    Done(u64),
}

/// Memoised depth-first path counting. The state is the current device and the set of
/// required devices already visited, as a bit mask over `required`.
struct PathCounter<'a> {
    devices: &'a Devices,
    end: usize,
    required: Vec<usize>,
    memo: AHashMap<(usize, u32), Visit>,
}

impl PathCounter<'_> {
    fn count(&mut self, device: usize, visited: u32) -> Result<u64, SolveError> {
        let visited = visited | self.required_bit(device);
        if device == self.end {
            let all = (1 << self.required.len()) - 1;
            return Ok(u64::from(visited == all));
        }
        match self.memo.get(&(device, visited)) {
            Some(Visit::Done(paths)) => return Ok(*paths),
            Some(Visit::InProgress) => {
                return Err(SolveError::Cycle(self.devices.names[device].clone()))
            }
            None => {}
        }
        self.memo.insert((device, visited), Visit::InProgress);
        let devices = self.devices;
        let mut paths = 0;
        for &output in &devices.outputs[device] {
            paths += self.count(output, visited)?;
        }
        self.memo.insert((device, visited), Visit::Done(paths));
        Ok(paths)
    }

    fn required_bit(&self, device: usize) -> u32 {
        self.required
            .iter()
            .position(|&r| r == device)
            .map_or(0, |i| 1 << i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const SERVER_EXAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn paths_from_you() {
        assert_eq!(Answer::new(5, 0), Reactor.solve(EXAMPLE).unwrap());
    }

    #[test]
    fn paths_through_converters() {
        assert_eq!(Answer::new(0, 2), Reactor.solve(SERVER_EXAMPLE).unwrap());
    }

    #[test]
    fn all_server_paths() {
        let devices = Devices::parse(SERVER_EXAMPLE).unwrap();
        assert_eq!(8, devices.count_paths(SERVER_RACK, OUT, &[]).unwrap());
        assert_eq!(4, devices.count_paths(SERVER_RACK, OUT, &["dac"]).unwrap());
    }

    #[test]
    fn cycle_detected() {
        let error = Reactor.solve("you: aaa\naaa: bbb\nbbb: aaa out\n").unwrap_err();
        match error {
            SolveError::Cycle(device) => assert_eq!("aaa", device),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn unreachable_cycle_ignored() {
        let input = "you: out\naaa: bbb\nbbb: aaa\n";
        assert_eq!(Answer::new(1, 0), Reactor.solve(input).unwrap());
    }

    #[test]
    fn missing_separator() {
        match Reactor.solve("you out\n").unwrap_err() {
            SolveError::Parse(e) => assert_eq!(ParseErrorType::MissingSeparator, e.error_type()),
            e => panic!("unexpected error: {}", e),
        }
    }
}
