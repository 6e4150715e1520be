//! Static partitioning of the file list into per-worker chunks.

/// Split `files` into contiguous chunks, one per worker.
///
/// The first chunks hold `files.len() / worker_count` elements each and the
/// last chunk also takes the remainder. When there are fewer files than
/// workers every file gets its own chunk, so no chunk is ever empty. A
/// `worker_count` of zero is treated as one.
pub fn partition<T>(files: &[T], worker_count: usize) -> Vec<&[T]> {
    let workers = worker_count.max(1);
    if files.is_empty() {
        return Vec::new();
    }
    if files.len() < workers {
        return files.chunks(1).collect();
    }

    let base = files.len() / workers;
    let mut chunks: Vec<&[T]> = Vec::with_capacity(workers);
    for i in 0..workers - 1 {
        chunks.push(&files[i * base..(i + 1) * base]);
    }
    // Last chunk absorbs the remainder.
    chunks.push(&files[(workers - 1) * base..]);
    chunks
}
