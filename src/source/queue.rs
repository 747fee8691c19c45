//! The streaming queue refill algorithm, ported from `seal_update_src`'s
//! unqueue/allocate/stream loop (§4.2.4).

use std::collections::VecDeque;
use std::time::Duration;

use crate::engine::{DeviceSourceState, Engine, QueuedBuf, SourceDeviceRecord};
use crate::error::Result;
use crate::raw::RawPcmAttr;
use crate::stream::Stream;

pub(super) fn duration_of(attr: RawPcmAttr, bytes: usize) -> Duration {
    let bytes_per_frame = (attr.bit_depth as usize / 8).max(1) * (attr.channels as usize).max(1);
    if attr.sample_rate_hz == 0 {
        return Duration::ZERO;
    }
    let frames = bytes / bytes_per_frame;
    Duration::from_secs_f64(frames as f64 / attr.sample_rate_hz as f64)
}

fn elapsed_for(record: &SourceDeviceRecord) -> Duration {
    match record.state {
        DeviceSourceState::Playing => {
            record.elapsed_before_pause
                + record
                    .play_started_at
                    .map(|t| t.elapsed())
                    .unwrap_or(Duration::ZERO)
        }
        _ => record.elapsed_before_pause,
    }
}

fn processed_count(elapsed: Duration, queue: &VecDeque<QueuedBuf>) -> usize {
    let mut acc = Duration::ZERO;
    let mut n = 0;
    for buf in queue {
        acc += buf.duration;
        if acc <= elapsed {
            n += 1;
        } else {
            break;
        }
    }
    n
}

/// Mirrors `seal_update_src`'s loop: drop buffers whose estimated playback
/// has elapsed, top the queue back up to `queue_size`, pull `chunk_size`
/// bytes per buffer, and rewind-and-retry at end of stream when looping.
/// Returns once the queue is full and nothing is processed, or once the
/// stream runs dry without looping.
pub(super) fn update(
    engine: &'static Engine,
    id: u32,
    stream: &Stream,
    looping: bool,
    queue_size: u8,
    chunk_size: u32,
) -> Result<()> {
    loop {
        let buf_id = {
            let mut device = engine.device();
            let Some(record) = device.sources.get_mut(&id) else {
                return Ok(());
            };
            let elapsed = elapsed_for(record);
            let nprocessed = processed_count(elapsed, &record.queue);
            let nqueued = record.queue.len();

            if nprocessed > 0 {
                let processed = record.queue.pop_front().expect("nprocessed > 0");
                if nqueued >= queue_size as usize {
                    device.buffers.remove(&processed.id);
                    continue;
                }
                processed.id
            } else if nqueued < queue_size as usize {
                device.alloc_buffer()
            } else {
                return Ok(());
            }
        };

        let attr = stream.attr();
        loop {
            let mut chunk = Vec::new();
            let n = stream.read(&mut chunk, chunk_size as usize)?;

            if n > 0 {
                let mut device = engine.device();
                if let Some(buf_record) = device.buffers.get_mut(&buf_id) {
                    buf_record.attr = attr;
                    buf_record.size = n;
                }
                if let Some(record) = device.sources.get_mut(&id) {
                    record.queue.push_back(QueuedBuf {
                        id: buf_id,
                        duration: duration_of(attr, n),
                    });
                }
                break;
            } else if looping {
                stream.rewind()?;
                continue;
            } else {
                engine.device().buffers.remove(&buf_id);
                return Ok(());
            }
        }
    }
}
