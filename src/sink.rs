//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/**
A destination for log records, such as the platform's unified log.

Sinks are infallible from the caller's point of view.  If the destination is unavailable the record
is dropped.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Submits the record to the destination.
    */
    fn emit(&self, record: LogRecord);

    /**
    Submits the record asynchronously.

    This allows sinks to reuse an async context that already exists.
    Sinks may choose to implement this as a simple wrapper around [Self::emit] if they wish.
    */
    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed.
    */
    fn flush(&self);
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, record: LogRecord) {
        (**self).emit(record)
    }

    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        (**self).emit_async(record)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/**
Lets a caller keep a reference to a sink after handing it to a [crate::LoggerHandle].
*/
impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, record: LogRecord) {
        (**self).emit(record)
    }

    fn emit_async<'s>(
        &'s self,
        record: LogRecord,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 's>> {
        (**self).emit_async(record)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/*
Boilerplate notes.

# Sink

Clone on a sink doesn't make sense; sinks usually own a platform handle.  Share with Arc instead.
PartialEq/Eq/Hash are unclear (data equality or provenance?) so they are not required.
Default is not sensible since a sink needs to know its destination.
Send/Sync are required since the facade may be used from any thread.
*/
