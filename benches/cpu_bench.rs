// CPU benchmarks - instruction dispatch and execution throughput.

use criterion::{criterion_group, criterion_main, Criterion};
use ferricom::{Bus, Cpu};
use std::hint::black_box;

/// Put a small looping program into RAM and point the CPU at it.
fn setup(program: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    for (i, &byte) in program.iter().enumerate() {
        bus.write(0x0200 + i as u16, byte);
    }
    let mut cpu = Cpu::new();
    cpu.pc = 0x0200;
    (cpu, bus)
}

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    // LDA #$42; JMP $0200
    group.bench_function("lda_immediate", |b| {
        let (mut cpu, mut bus) = setup(&[0xA9, 0x42, 0x4C, 0x00, 0x02]);
        b.iter(|| {
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    // CLC; ADC #$01; JMP $0200
    group.bench_function("adc_immediate", |b| {
        let (mut cpu, mut bus) = setup(&[0x18, 0x69, 0x01, 0x4C, 0x00, 0x02]);
        b.iter(|| {
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    // STA $0300; JMP $0200
    group.bench_function("sta_absolute", |b| {
        let (mut cpu, mut bus) = setup(&[0x8D, 0x00, 0x03, 0x4C, 0x00, 0x02]);
        b.iter(|| {
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    // LDA ($40),Y; JMP $0200 -- indirection plus indexing
    group.bench_function("lda_indirect_indexed", |b| {
        let (mut cpu, mut bus) = setup(&[0xB1, 0x40, 0x4C, 0x00, 0x02]);
        bus.write(0x0040, 0x00);
        bus.write(0x0041, 0x03);
        cpu.y = 0x10;
        b.iter(|| {
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    // LDX #$FF; loop: DEX; BNE loop; JMP $0200 -- branch-heavy workload
    group.bench_function("dex_bne_loop", |b| {
        let (mut cpu, mut bus) = setup(&[0xA2, 0xFF, 0xCA, 0xD0, 0xFD, 0x4C, 0x00, 0x02]);
        b.iter(|| {
            cpu.step(black_box(&mut bus)).unwrap();
        });
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    use ferricom::cartridge::{Cartridge, Mirroring};
    use ferricom::Emulator;

    let mut group = c.benchmark_group("frame");

    // A full frame of a spinning guest: 262 scanlines of JMP dispatch plus
    // 239 rendered rows and the VBLANK interrupt
    group.bench_function("run_frame_spin", |b| {
        let mut prg = vec![0u8; 16 * 1024];
        prg[0] = 0x4C; // JMP $8000
        prg[1] = 0x00;
        prg[2] = 0x80;
        prg[0x3FFA] = 0x00; // NMI -> $8000 too
        prg[0x3FFB] = 0x80;
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;

        let cartridge = Cartridge {
            prg_rom: prg,
            chr_rom: vec![0; 8 * 1024],
            mirroring: Mirroring::Horizontal,
            mapper: 0,
            prg_banks: 1,
            chr_banks: 1,
            battery: false,
        };

        let mut emulator = Emulator::new();
        emulator.insert_cartridge(&cartridge).unwrap();

        b.iter(|| {
            emulator.run_frame().unwrap();
            black_box(emulator.frame().as_slice()[0]);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cpu_instructions, bench_frame);
criterion_main!(benches);
