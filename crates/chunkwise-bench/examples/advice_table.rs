//! Print fast and bulk advice for the reference layouts.

use chunkwise_bench::{reference_advisor, reference_layouts};
use chunkwise_core::ChunkSizing;

fn main() {
    let advisor = reference_advisor();
    let config = advisor.config();
    println!(
        "page {} B, overhead {} B, bulk cap {} pages\n",
        config.page_size, config.chunk_overhead, config.max_bulk_pages
    );
    println!(
        "{:<16} {:>8} {:>8} {:>8} {:>10} {:>10}",
        "layout", "size", "fast", "fast2^k", "bulk(0)", "bulk(1000)"
    );
    for (name, l) in reference_layouts() {
        let fast = advisor.fast_chunk_layout(l);
        let (pow2, _) = advisor.fast_chunk_layout_pow2(l);
        let bulk0 = advisor.bulk_chunk_layout(l, 0);
        let bulk1000 = advisor.bulk_chunk_layout(l, 1000);
        println!(
            "{:<16} {:>8} {:>8} {:>8} {:>10} {:>10}",
            name,
            l.size(),
            fast.count(),
            pow2.count(),
            bulk0.count(),
            bulk1000.count()
        );
    }
}
