use anyhow::{ensure, Context, Result};
use dynvec::{Config, DynVec};
use log::info;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env().context("reading vector config from env")?;
    info!("using {:?}", config);

    let mut vec = DynVec::with_config(config)?;
    vec.print();

    // pop on empty
    for _ in 0..2 {
        ensure!(vec.pop().is_none(), "pop on an empty vector returned a value");
        ensure!(vec.len() == 0);
        ensure!(vec.capacity() == config.initial_capacity);
    }

    // push & pop
    vec.push("foo")?;
    vec.print();
    ensure!(vec.len() == 1);
    let a = vec.pop();
    ensure!(vec.len() == 0);
    println!("a = {}", a.as_deref().unwrap_or("(null)"));
    vec.print();
    ensure!(vec.pop().is_none());
    ensure!(vec.len() == 0);

    // get
    vec.push("foo1")?;
    vec.push("foo2")?;
    vec.push("foo3")?;
    ensure!(vec.len() == 3);
    ensure!(vec.get(0) == Some("foo1"));
    ensure!(vec.get(1) == Some("foo2"));
    ensure!(vec.get(2) == Some("foo3"));
    ensure!(vec.get(3).is_none());

    // set
    vec.set(5, "foo4")?;
    ensure!(vec.len() == 6);
    vec.print();
    vec.push("foo5")?;
    ensure!(vec.len() == 7);
    vec.print();

    vec.set(5, "foo42")?;
    ensure!(vec.len() == 7);
    ensure!(vec.get(5) == Some("foo42"));
    vec.print();

    vec.set(500, "foo500").context("setting a far index")?;
    ensure!(vec.len() == 501);
    ensure!(vec.capacity() >= 501);
    vec.print();

    vec.destroy();

    // autoresize
    let mut vec = DynVec::with_config(config)?;
    vec.print();
    for i in 0..35 {
        vec.push("a").with_context(|| format!("pushing element {}", i))?;
        vec.print();
    }
    ensure!(vec.len() == 35);
    ensure!((0..35).all(|i| vec.get(i) == Some("a")));

    vec.destroy();

    Ok(())
}
