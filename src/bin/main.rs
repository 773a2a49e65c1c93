use anyhow::Result;

fn main() -> Result<()> {
    cputempfreq::start_sampling()
}
