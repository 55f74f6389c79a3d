use crate::key::MetricKind;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;
const KB_PER_MB: f64 = 1_000.0;
const BYTES_PER_KIB: f64 = 1024.0;

/// A metric derived from one schema; knows where in a figure row it is
/// drawn.
pub trait MetricView: Copy + fmt::Debug + PartialEq + 'static {
    /// Figure column of the panel this metric is drawn in.
    fn column(&self) -> usize;

    /// Legend entry, for panels that show more than one line.
    fn label(&self) -> Option<&'static str>;
}

/// One row of a measurement table.
///
/// Each schema comes with its own metric enumeration, so a metric can only
/// be derived from the table it was defined for.
pub trait Record: DeserializeOwned + fmt::Debug {
    type Metric: MetricView;

    const KIND: MetricKind;
    /// Columns that must be present in the header.
    const COLUMNS: &'static [&'static str];
    /// Every metric the chart of this kind draws, in drawing order.
    const METRICS: &'static [Self::Metric];

    /// Value of the independent variable (`hops` or `workers`).
    fn x(&self) -> f64;

    fn derive(&self, metric: Self::Metric) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatencyRow {
    pub hops: f64,
    pub n: f64,
    /// total duration of `n` negotiations, in nanoseconds
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyMetric {
    /// milliseconds per negotiation
    PerOperation,
}

impl MetricView for LatencyMetric {
    fn column(&self) -> usize {
        0
    }

    fn label(&self) -> Option<&'static str> {
        None
    }
}

impl LatencyRow {
    pub fn latency_ms(&self) -> f64 {
        self.duration / self.n / NANOS_PER_MILLI
    }
}

impl Record for LatencyRow {
    type Metric = LatencyMetric;

    const KIND: MetricKind = MetricKind::Latency;
    const COLUMNS: &'static [&'static str] = &["hops", "n", "duration"];
    const METRICS: &'static [LatencyMetric] = &[LatencyMetric::PerOperation];

    fn x(&self) -> f64 {
        self.hops
    }

    fn derive(&self, metric: LatencyMetric) -> f64 {
        match metric {
            LatencyMetric::PerOperation => self.latency_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MessageSizeRow {
    pub hops: f64,
    /// bytes sent by the initiator
    pub send: f64,
    /// bytes received by the initiator
    pub recv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSizeMetric {
    /// KiB sent
    Sent,
    /// KiB received
    Received,
    /// received over sent bytes
    Amplification,
}

impl MetricView for MessageSizeMetric {
    fn column(&self) -> usize {
        match self {
            Self::Sent | Self::Received => 0,
            Self::Amplification => 1,
        }
    }

    fn label(&self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("sent"),
            Self::Received => Some("received"),
            Self::Amplification => None,
        }
    }
}

impl MessageSizeRow {
    pub fn sent_kib(&self) -> f64 {
        self.send / BYTES_PER_KIB
    }

    pub fn received_kib(&self) -> f64 {
        self.recv / BYTES_PER_KIB
    }

    /// `recv / send`; not finite when nothing was sent.
    pub fn amplification(&self) -> f64 {
        self.recv / self.send
    }
}

impl Record for MessageSizeRow {
    type Metric = MessageSizeMetric;

    const KIND: MetricKind = MetricKind::MessageSize;
    const COLUMNS: &'static [&'static str] = &["hops", "send", "recv"];
    const METRICS: &'static [MessageSizeMetric] = &[
        MessageSizeMetric::Sent,
        MessageSizeMetric::Received,
        MessageSizeMetric::Amplification,
    ];

    fn x(&self) -> f64 {
        self.hops
    }

    fn derive(&self, metric: MessageSizeMetric) -> f64 {
        match metric {
            MessageSizeMetric::Sent => self.sent_kib(),
            MessageSizeMetric::Received => self.received_kib(),
            MessageSizeMetric::Amplification => self.amplification(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThroughputRow {
    pub workers: f64,
    pub n: f64,
    /// nanoseconds to complete `n` negotiations
    pub duration: f64,
    /// peak memory, in KB
    pub memory: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputMetric {
    /// negotiations per second
    Throughput,
    /// peak memory in MB
    PeakMemory,
}

impl MetricView for ThroughputMetric {
    fn column(&self) -> usize {
        match self {
            Self::Throughput => 0,
            Self::PeakMemory => 1,
        }
    }

    fn label(&self) -> Option<&'static str> {
        None
    }
}

impl ThroughputRow {
    pub fn throughput(&self) -> f64 {
        self.n * NANOS_PER_SEC / self.duration
    }

    pub fn memory_mb(&self) -> f64 {
        self.memory / KB_PER_MB
    }
}

impl Record for ThroughputRow {
    type Metric = ThroughputMetric;

    const KIND: MetricKind = MetricKind::Throughput;
    const COLUMNS: &'static [&'static str] =
        &["workers", "n", "duration", "memory"];
    const METRICS: &'static [ThroughputMetric] =
        &[ThroughputMetric::Throughput, ThroughputMetric::PeakMemory];

    fn x(&self) -> f64 {
        self.workers
    }

    fn derive(&self, metric: ThroughputMetric) -> f64 {
        match metric {
            ThroughputMetric::Throughput => self.throughput(),
            ThroughputMetric::PeakMemory => self.memory_mb(),
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn latency_is_duration_over_n(n: u32, duration: u32) -> bool {
        let row = LatencyRow {
            hops: 1.0,
            n: n as f64,
            duration: duration as f64,
        };
        let expected = duration as f64 / n as f64 / 1_000_000.0;
        let latency = row.derive(LatencyMetric::PerOperation);
        latency == expected || (latency.is_nan() && expected.is_nan())
    }

    #[quickcheck]
    fn latency_monotone_in_duration(n: u16, a: u32, b: u32) -> bool {
        let n = n as f64 + 1.0;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let row = |duration: u32| LatencyRow {
            hops: 1.0,
            n,
            duration: duration as f64,
        };
        row(low).latency_ms() <= row(high).latency_ms()
    }

    #[quickcheck]
    fn amplification_is_recv_over_send(send: u32, recv: u32) -> bool {
        let row = MessageSizeRow {
            hops: 1.0,
            send: send as f64,
            recv: recv as f64,
        };
        let amplification = row.derive(MessageSizeMetric::Amplification);
        if send == 0 {
            !amplification.is_finite()
        } else {
            amplification == recv as f64 / send as f64
        }
    }

    #[quickcheck]
    fn throughput_and_memory_positive(n: u32, duration: u32, memory: u32) -> bool {
        // strictly positive inputs
        let row = ThroughputRow {
            workers: 1.0,
            n: n as f64 + 1.0,
            duration: duration as f64 + 1.0,
            memory: memory as f64 + 1.0,
        };
        let throughput = row.derive(ThroughputMetric::Throughput);
        let memory_mb = row.derive(ThroughputMetric::PeakMemory);
        throughput == row.n * 1_000_000_000.0 / row.duration
            && memory_mb == row.memory / 1_000.0
            && throughput > 0.0
            && memory_mb > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_in_millis() {
        let row = LatencyRow {
            hops: 1.0,
            n: 100.0,
            duration: 50_000_000.0,
        };
        assert_eq!(row.latency_ms(), 0.5);
        let row = LatencyRow {
            hops: 2.0,
            n: 100.0,
            duration: 90_000_000.0,
        };
        assert_eq!(row.latency_ms(), 0.9);
    }

    #[test]
    fn zero_sent_is_not_finite() {
        let row = MessageSizeRow {
            hops: 3.0,
            send: 0.0,
            recv: 512.0,
        };
        assert_eq!(row.amplification(), f64::INFINITY);

        let row = MessageSizeRow {
            hops: 3.0,
            send: 0.0,
            recv: 0.0,
        };
        assert!(row.amplification().is_nan());
    }

    #[test]
    fn data_volume_in_kib() {
        let row = MessageSizeRow {
            hops: 1.0,
            send: 2048.0,
            recv: 512.0,
        };
        assert_eq!(row.derive(MessageSizeMetric::Sent), 2.0);
        assert_eq!(row.derive(MessageSizeMetric::Received), 0.5);
        assert_eq!(row.derive(MessageSizeMetric::Amplification), 0.25);
    }

    #[test]
    fn throughput_scaling() {
        let row = ThroughputRow {
            workers: 4.0,
            n: 2000.0,
            duration: 500_000_000.0,
            memory: 25_000.0,
        };
        assert_eq!(row.throughput(), 4000.0);
        assert_eq!(row.memory_mb(), 25.0);
    }

    #[test]
    fn columns_match_views() {
        assert_eq!(MessageSizeMetric::Sent.column(), 0);
        assert_eq!(MessageSizeMetric::Received.column(), 0);
        assert_eq!(MessageSizeMetric::Amplification.column(), 1);
        assert_eq!(ThroughputMetric::PeakMemory.column(), 1);
        for metric in MessageSizeRow::METRICS {
            assert!(metric.column() < MessageSizeRow::KIND.columns());
        }
        for metric in ThroughputRow::METRICS {
            assert!(metric.column() < ThroughputRow::KIND.columns());
        }
    }
}
