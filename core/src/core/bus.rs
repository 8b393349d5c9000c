/// Generic memory-mapped bus interface.
///
/// Memory and I/O port space are kept separate, as on the 8080: `read`/
/// `write` address the 64 KiB memory map, `io_read`/`io_write` address the
/// 256-entry port space reached by `IN`/`OUT`. A board with no separate I/O
/// space can leave the defaults in place, which fold ports onto memory.
///
/// Unlike the bus this is adapted from, there is no `BusMaster` parameter:
/// this board has exactly one bus master (the CPU) and no DMA, so
/// multi-master arbitration has nothing to arbitrate. There is likewise no
/// `check_interrupts` query — interrupts are injected by an explicit,
/// scheduler-driven call (see `Cpu8080::interrupt`) rather than polled from
/// the bus at instruction-fetch boundaries.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    /// Read from I/O port address space (separate from memory on the 8080).
    /// Default maps to memory read; override for boards with separate I/O.
    fn io_read(&mut self, port: u8) -> u8 {
        self.read(port as u16)
    }

    /// Write to I/O port address space (separate from memory on the 8080).
    /// Default maps to memory write; override for boards with separate I/O.
    fn io_write(&mut self, port: u8, data: u8) {
        self.write(port as u16, data);
    }
}
