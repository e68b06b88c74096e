/*!
# `CALL <label>`

## Purpose
Call a subroutine with `JSR`.

## Remarks
The subroutine is written in assembly and must return with `RTS`.

## Example
```text
call beep
```
```text
JSR beep
```

*/
